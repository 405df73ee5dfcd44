//! Text and JSON output for the derived view and the selector options.

use std::io::Write;

use serde::Serialize;

use storefront_catalog::{PRICE_BUCKETS, Product, SORT_OPTIONS};

/// Ratings are unvalidated; stars are clamped to this many.
const MAX_STARS: i64 = 5;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
struct ViewOut<'a> {
    shown: usize,
    total: usize,
    products: &'a [Product],
}

#[derive(Serialize)]
struct OptionsOut<'a> {
    categories: &'a [String],
    price_buckets: Vec<PriceOptionOut>,
    sort_options: &'static [storefront_catalog::SortOption],
}

#[derive(Serialize)]
struct PriceOptionOut {
    label: &'static str,
    value: String,
}

pub fn stars(rating: Option<i64>) -> String {
    let count = rating.unwrap_or(0).clamp(0, MAX_STARS);
    "⭐".repeat(count as usize)
}

/// One product card.
pub fn card(product: &Product) -> String {
    let price = product
        .price()
        .map_or_else(|| "n/a".to_string(), |p| format!("₹{p}"));
    format!(
        "{}\n  {}\n  Price: {}\n  Rating: {}\n",
        product.name(),
        product.description(),
        price,
        stars(product.rating()),
    )
}

pub fn write_view(out: &mut impl Write, json: bool, view: &[Product], total: usize) -> anyhow::Result<()> {
    if json {
        let data = ViewOut {
            shown: view.len(),
            total,
            products: view,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&JsonOut { ok: true, data })?)?;
        return Ok(());
    }

    if view.is_empty() {
        writeln!(out, "No products match the current filters.")?;
        return Ok(());
    }
    writeln!(out, "Showing {} of {} products\n", view.len(), total)?;
    for product in view {
        writeln!(out, "{}", card(product))?;
    }
    Ok(())
}

pub fn write_options(out: &mut impl Write, json: bool, categories: &[String]) -> anyhow::Result<()> {
    if json {
        let data = OptionsOut {
            categories,
            price_buckets: PRICE_BUCKETS
                .iter()
                .map(|b| PriceOptionOut {
                    label: b.label,
                    value: b.option_value(),
                })
                .collect(),
            sort_options: &SORT_OPTIONS,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&JsonOut { ok: true, data })?)?;
        return Ok(());
    }

    writeln!(out, "Categories:")?;
    writeln!(out, "  all (All Categories)")?;
    for category in categories {
        writeln!(out, "  {category}")?;
    }
    writeln!(out, "Price:")?;
    for bucket in PRICE_BUCKETS.iter() {
        writeln!(out, "  {}", bucket.label)?;
    }
    writeln!(out, "Sort:")?;
    for option in SORT_OPTIONS.iter() {
        writeln!(out, "  {} ({})", option.value, option.label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    fn render(view: &[Product], total: usize, json: bool) -> String {
        let mut buf = Vec::new();
        write_view(&mut buf, json, view, total).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn stars_are_clamped() {
        assert_eq!(stars(Some(3)), "⭐⭐⭐");
        assert_eq!(stars(Some(9)), "⭐".repeat(5));
        assert_eq!(stars(Some(-2)), "");
        assert_eq!(stars(None), "");
    }

    #[test]
    fn card_shows_price_and_rating() {
        let p = Product::new(ProductId::new(1), "Tea Kettle")
            .with_description("1.5 litre")
            .with_price(1499.0)
            .with_rating(2);
        assert_eq!(card(&p), "Tea Kettle\n  1.5 litre\n  Price: ₹1499\n  Rating: ⭐⭐\n");

        let unpriced = Product::new(ProductId::new(2), "Mystery Box");
        assert!(card(&unpriced).contains("Price: n/a"));
    }

    #[test]
    fn empty_view_says_so() {
        assert_eq!(render(&[], 10, false), "No products match the current filters.\n");
    }

    #[test]
    fn text_view_has_header_and_cards() {
        let view = vec![Product::new(ProductId::new(1), "Lamp").with_price(10.0)];
        let text = render(&view, 3, false);
        assert!(text.starts_with("Showing 1 of 3 products\n"));
        assert!(text.contains("Lamp\n"));
    }

    #[test]
    fn json_view_wraps_products() {
        let view = vec![Product::new(ProductId::new(7), "Lamp").with_price(10.0)];
        let value: serde_json::Value = serde_json::from_str(&render(&view, 3, true)).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["data"]["shown"], 1);
        assert_eq!(value["data"]["total"], 3);
        assert_eq!(value["data"]["products"][0]["id"], 7);
    }

    #[test]
    fn options_list_every_table() {
        let mut buf = Vec::new();
        write_options(&mut buf, false, &["Books".to_string()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("  Books\n"));
        assert!(text.contains("  Under 1000\n"));
        assert!(text.contains("  price-desc (Price: High to Low)\n"));

        let mut buf = Vec::new();
        write_options(&mut buf, true, &[]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["data"]["price_buckets"][1]["value"], "0,1000");
        assert_eq!(value["data"]["sort_options"][4]["value"], "rating");
    }
}
