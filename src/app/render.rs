use crate::core::catalog::Catalog;
use crate::core::layout::{Breakpoint, DetailStyle, NavStyle};
use crate::core::session::MenuSession;
use std::fmt::Write;

fn nav_labels(catalog: &Catalog, session: &MenuSession) -> Vec<String> {
    catalog
        .categories()
        .iter()
        .map(|category| {
            let icon = category.icon.as_deref().unwrap_or("");
            let label = format!("{} {}", icon, category.name).trim().to_string();
            if category.id == session.active_category {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect()
}

fn item_count_label(count: u64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Category navigation, marking the active one.
pub fn render_navigation(catalog: &Catalog, session: &MenuSession, breakpoint: Breakpoint) -> String {
    let labels = nav_labels(catalog, session);
    match breakpoint.policy().nav {
        NavStyle::BottomTabs => labels.join(" | "),
        NavStyle::SideRail => labels.join("\n"),
    }
}

/// The full-height category sheet phones open from the menu button.
/// `None` unless the bottom tabs are in use and the sheet is open.
pub fn render_nav_sheet(
    catalog: &Catalog,
    session: &MenuSession,
    breakpoint: Breakpoint,
) -> Option<String> {
    if breakpoint.policy().nav != NavStyle::BottomTabs || !session.nav_open {
        return None;
    }
    let mut out = String::from("Menu\n");
    for label in nav_labels(catalog, session) {
        let _ = writeln!(out, "  {}", label);
    }
    Some(out)
}

/// The item gallery of the active category with placements for `breakpoint`.
pub fn render_gallery(
    catalog: &Catalog,
    session: &MenuSession,
    breakpoint: Breakpoint,
    currency_symbol: &str,
) -> String {
    let policy = breakpoint.policy();
    let mut out = String::new();
    for item in catalog.items_in(&session.active_category) {
        let placement = policy.place(item);
        let marker = if session.selected_item == Some(item.id) {
            "*"
        } else {
            " "
        };
        let _ = writeln!(
            out,
            "{} {:>3}  {:<28} {:>9}  @({:>2}%,{:>2}%) {}px",
            marker,
            item.id,
            item.name,
            item.price.format(currency_symbol),
            placement.x,
            placement.y,
            placement.diameter_px
        );
    }
    out
}

/// The detail overlay for the selected item, or `None` when nothing is selected.
pub fn render_detail(
    catalog: &Catalog,
    session: &MenuSession,
    breakpoint: Breakpoint,
    currency_symbol: &str,
) -> Option<String> {
    let item = session.detail(catalog)?;
    let mut out = String::new();
    let _ = writeln!(out, "{}  {}", item.name, item.price.format(currency_symbol));
    let _ = writeln!(out, "{}", item.description);
    if let (DetailStyle::Sheet, Some(image)) = (breakpoint.policy().detail, &item.image) {
        let _ = writeln!(out, "image: {}", image);
    }
    let in_cart = session.cart.quantity_of(item.id);
    if in_cart > 0 {
        let _ = writeln!(out, "In your order: {}", in_cart);
    }
    Some(out)
}

/// The "Your Order" panel.
pub fn render_cart(session: &MenuSession, currency_symbol: &str) -> String {
    let cart = &session.cart;
    let mut out = String::from("Your Order\n");
    if cart.is_empty() {
        out.push_str("Your cart is empty\n");
    } else {
        for line in cart.lines() {
            let _ = writeln!(
                out,
                "  {:<28} {} x {}",
                line.name,
                line.unit_price.format(currency_symbol),
                line.quantity
            );
        }
    }
    let _ = writeln!(
        out,
        "Total ({}): {}",
        item_count_label(cart.total_item_count()),
        cart.total_price().format(currency_symbol)
    );
    out
}

/// The cart button with its item-count badge, shown while the panel is closed.
pub fn render_cart_badge(session: &MenuSession) -> String {
    match session.cart.total_item_count() {
        0 => "[Cart]".to_string(),
        count => format!("[Cart: {}]", item_count_label(count)),
    }
}

/// The order panel when it is open, otherwise just the cart button.
pub fn render_cart_area(session: &MenuSession, currency_symbol: &str) -> String {
    if session.cart_open {
        render_cart(session, currency_symbol)
    } else {
        format!("{}\n", render_cart_badge(session))
    }
}
