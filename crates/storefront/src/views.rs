//! View models for the page template.
//!
//! Everything here is display-ready: numbers are already formatted, the
//! `data-testid` suffixes are plain strings, and hidden sections are still
//! filled in so the markup matches what a browser test expects to find.

use qa_playground_core::{Category, CategoryFilter, Product};

use crate::models::CartLine;
use crate::navigation::NavItem;
use crate::services::feedback::TOPICS;
use crate::services::{Notice, Totals};

/// The whole page.
#[derive(Debug, Clone)]
pub struct PageView {
    pub theme: &'static str,
    pub chaos_on: bool,
    pub chaos_label: &'static str,
    pub nav: Vec<NavItem>,
    pub show_home: bool,
    pub show_catalog: bool,
    pub show_cart: bool,
    pub show_auth: bool,
    pub show_feedback: bool,
    pub cart_count: i64,
    pub catalog: CatalogView,
    pub cart: CartView,
    pub auth: AuthView,
    pub feedback: FeedbackView,
    /// Activity log, newest first.
    pub events: Vec<String>,
    /// One-shot alert (add-to-cart outage).
    pub alert: Option<String>,
}

/// A form message; empty when nothing has been reported yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageView {
    /// `ok`, `err`, or empty.
    pub class: &'static str,
    pub text: String,
}

impl From<Option<Notice>> for MessageView {
    fn from(notice: Option<Notice>) -> Self {
        notice.map_or_else(Self::default, |notice| Self {
            class: notice.kind.css_class(),
            text: notice.text,
        })
    }
}

/// One option of a `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Catalog section.
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub query: String,
    pub categories: Vec<OptionView>,
    pub products: Vec<ProductCardView>,
    pub notice: MessageView,
}

impl CatalogView {
    /// Build the section for the given search and its results.
    #[must_use]
    pub fn new(
        query: &str,
        filter: &CategoryFilter,
        products: &[Product],
        notice: Option<Notice>,
    ) -> Self {
        let mut categories = vec![OptionView {
            value: "all".to_string(),
            label: "All".to_string(),
            selected: *filter == CategoryFilter::All,
        }];
        categories.extend(Category::ALL.into_iter().map(|category| OptionView {
            value: category.as_str().to_string(),
            label: category.as_str().to_string(),
            selected: *filter == CategoryFilter::Only(category),
        }));

        Self {
            query: query.to_string(),
            categories,
            products: products.iter().map(ProductCardView::from).collect(),
            notice: notice.into(),
        }
    }
}

/// A product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.to_string(),
            price: product.price.to_string(),
        }
    }
}

/// Cart section.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub discount: String,
    pub payable: String,
    /// Text shown in the coupon field.
    pub coupon_code: String,
    pub notice: MessageView,
    pub coupon_notice: MessageView,
    pub checkout_notice: MessageView,
}

impl CartView {
    /// Build the section from stored lines and computed totals.
    #[must_use]
    pub fn new(lines: &[CartLine], totals: Totals, coupon: Option<&str>) -> Self {
        Self {
            lines: lines.iter().map(CartLineView::from).collect(),
            subtotal: totals.subtotal.to_string(),
            discount: totals.discount.to_string(),
            payable: totals.payable.to_string(),
            coupon_code: coupon.unwrap_or_default().to_string(),
            notice: MessageView::default(),
            coupon_notice: MessageView::default(),
            checkout_notice: MessageView::default(),
        }
    }

    /// Returns true when there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    /// Stored quantity; `NaN` when it is not a number.
    pub qty: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            unit_price: line.price.to_string(),
            qty: line.qty.to_string(),
        }
    }
}

/// Auth section.
#[derive(Debug, Clone, Default)]
pub struct AuthView {
    /// `Name <email>`, or a dash when logged out.
    pub current_user: String,
    pub login_notice: MessageView,
    pub register_notice: MessageView,
}

/// Placeholder shown when nobody is logged in.
pub const NO_USER: &str = "—";

/// Feedback section.
#[derive(Debug, Clone)]
pub struct FeedbackView {
    pub topics: Vec<&'static str>,
    pub notice: MessageView,
}

impl FeedbackView {
    #[must_use]
    pub fn new(notice: Option<Notice>) -> Self {
        Self {
            topics: TOPICS.to_vec(),
            notice: notice.into(),
        }
    }
}
