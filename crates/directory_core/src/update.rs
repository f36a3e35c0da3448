use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => {
            state.begin_loading();
            vec![Effect::FetchListings, Effect::GenerateIllustration]
        }
        Msg::ListingsFetched(listings) => {
            state.finish_loading(listings);
            Vec::new()
        }
        Msg::IllustrationReady(image) => {
            state.set_header_image(image);
            Vec::new()
        }
        Msg::CategorySelected(selected) => {
            state.select_category(selected);
            Vec::new()
        }
        Msg::SearchChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        Msg::SearchCleared => {
            state.set_search_term(String::new());
            Vec::new()
        }
        Msg::ShowAllClicked => {
            state.reset_filters();
            Vec::new()
        }
        // An invalid draft leaves the session and the form untouched.
        Msg::DraftSubmitted(draft) => match state.submit(draft) {
            Ok(listing) => vec![Effect::SaveListing(listing)],
            Err(_) => Vec::new(),
        },
        Msg::FormSubmitted => {
            // The submit button only exists on an open form and stays
            // disabled while a save is in flight.
            if !state.form().is_open() || !state.submit_enabled() {
                return (state, Vec::new());
            }
            submit_form(&mut state)
        }
        Msg::SaveCompleted {
            listing_id,
            accepted,
        } => {
            state.record_save(&listing_id, accepted);
            Vec::new()
        }
        Msg::FormOpened => {
            if state.form_mut().open() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FormClosed => {
            if state.form_mut().close() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FormFieldEdited { field, value } => {
            if state.form_mut().edit(field, value) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit_form(state: &mut AppState) -> Vec<Effect> {
    let draft = state.form().draft().clone();
    match state.submit(draft) {
        Ok(listing) => {
            state.form_mut().reset();
            vec![Effect::SaveListing(listing)]
        }
        Err(errors) => {
            state.form_mut().reject(errors);
            state.mark_dirty();
            Vec::new()
        }
    }
}
