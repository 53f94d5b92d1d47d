use crate::domain::model::{CartLine, ItemId, MenuItem, Money, OrderSummary, SummaryLine};

/// The order being built in one menu session.
///
/// Lines keep the order in which items were first added. A line never has a
/// quantity of zero: removing the last unit deletes the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`. Name and price are captured on the first add
    /// and are not refreshed by later adds.
    pub fn add(&mut self, item: &MenuItem) {
        if self.increment(item.id) {
            return;
        }
        self.lines.push(CartLine {
            id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
        });
    }

    /// Adds one unit to an existing line. Returns false when no line has `id`.
    pub fn increment(&mut self, id: ItemId) -> bool {
        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Removes one unit. Unknown ids are ignored.
    pub fn remove(&mut self, id: ItemId) {
        let Some(index) = self.lines.iter().position(|line| line.id == id) else {
            return;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
    }

    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn quantity_of(&self, id: ItemId) -> u32 {
        self.lines
            .iter()
            .find(|line| line.id == id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn summary(&self, currency_symbol: &str) -> OrderSummary {
        OrderSummary {
            lines: self.lines.iter().map(SummaryLine::from).collect(),
            total_items: self.total_item_count(),
            total_price: self.total_price(),
            currency_symbol: currency_symbol.to_string(),
            generated_at: chrono::Utc::now(),
        }
    }
}
