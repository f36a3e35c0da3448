//! Plain-text rendering of the directory view model.

use std::fmt::Write;

use directory_core::{DirectoryViewModel, FormView, ListingCardView, SyncStatus};

const TITLE: &str = "Find Trusted Services in Maryland";

pub fn render(view: &DirectoryViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {TITLE} ==");
    let _ = writeln!(out, "Header image: {}", describe_image(&view.header_image));
    if !view.search_term.is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", view.search_term);
    }
    let _ = writeln!(out, "{}", category_bar(view));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", view.heading);
    let _ = writeln!(out, "{}", view.status_line);
    if view.show_clear_search {
        let _ = writeln!(out, "  (type `clear` to clear search results)");
    }

    for card in &view.listings {
        render_card(&mut out, card);
    }

    if view.show_empty_state {
        let _ = writeln!(out);
        let _ = writeln!(out, "No businesses found");
        let _ = writeln!(out, "Try adjusting your filters or search terms.");
        let _ = writeln!(out, "  (type `all` to view all businesses)");
    }

    if view.form.open {
        render_form(&mut out, &view.form);
    }
    out
}

fn category_bar(view: &DirectoryViewModel) -> String {
    view.categories
        .iter()
        .map(|chip| {
            if chip.active {
                format!("[{}]", chip.label)
            } else {
                chip.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_card(out: &mut String, card: &ListingCardView) {
    let sync = match card.sync {
        Some(SyncStatus::Pending) => " (saving...)",
        Some(SyncStatus::Failed) => " (not synced)",
        Some(SyncStatus::Synced) | None => "",
    };
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "* {} [{}] {:.1}{}",
        card.name, card.category_label, card.rating, sync
    );
    let _ = writeln!(out, "  {}", card.description);
    let _ = writeln!(out, "  {} | {}", card.address, card.phone);
}

fn render_form(out: &mut String, form: &FormView) {
    let _ = writeln!(out);
    let _ = writeln!(out, "-- Add Your Business --");
    let _ = writeln!(out, "List your services for the Edgewater community.");
    for field in &form.fields {
        let _ = writeln!(
            out,
            "  {:<8} {}*: {}",
            field.field.key(),
            field.label,
            field.value
        );
        if let Some(error) = field.error {
            let _ = writeln!(out, "           ! {error}");
        }
    }
    let submit = if form.submit_enabled {
        "Add Business (type `submit`)"
    } else {
        "Processing..."
    };
    let _ = writeln!(out, "  {submit}   Cancel (type `cancel`)");
}

/// Generated images arrive as long `data:` URLs; only their kind is shown.
fn describe_image(image: &str) -> String {
    match image.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split(';').next().unwrap_or("image");
            format!("generated {mime} ({} bytes)", image.len())
        }
        None => image.to_string(),
    }
}
