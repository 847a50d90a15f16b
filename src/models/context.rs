// src/models/context.rs

//! Running taxonomic context carried across the traversal.

/// The current order/family headings, as last seen on the listing page.
///
/// A newly encountered marker overwrites the prior value of that field and
/// leaves the other field untouched. The context is never cleared; it is
/// snapshotted into every species record produced after the last update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonContext {
    /// Current order heading, e.g. "ПОГАНКООБРАЗНЫЕ"
    pub order: Option<String>,

    /// Current family heading, e.g. "Поганковые"
    pub family: Option<String>,
}

impl TaxonContext {
    /// Replace the current order, keeping the current family.
    pub fn set_order(&mut self, token: impl Into<String>) {
        self.order = Some(token.into());
    }

    /// Replace the current family, keeping the current order.
    pub fn set_family(&mut self, token: impl Into<String>) {
        self.family = Some(token.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_overwrite_without_reset() {
        let mut ctx = TaxonContext::default();
        assert_eq!(ctx.order, None);
        assert_eq!(ctx.family, None);

        ctx.set_order("ГАГАРООБРАЗНЫЕ");
        ctx.set_family("Гагаровые");
        ctx.set_order("ПОГАНКООБРАЗНЫЕ");

        // New order does not clear the family
        assert_eq!(ctx.order.as_deref(), Some("ПОГАНКООБРАЗНЫЕ"));
        assert_eq!(ctx.family.as_deref(), Some("Гагаровые"));
    }
}
