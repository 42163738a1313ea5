//! # Basket Demo
//!
//! Fills a basket from a fixed catalog and prints its receipt.
//!
//! ## Usage
//! ```bash
//! # Reference scenario: 4 apples, 1 pear, APPLE241 + BDD
//! cargo run -p basket-core --bin basket-demo
//!
//! # Custom basket: CODE or CODExQTY, discounts with --discount
//! cargo run -p basket-core --bin basket-demo -- f1x2 d1 s1 --discount MD1
//!
//! # Also print the totals as JSON
//! cargo run -p basket-core --bin basket-demo -- f1x4 --discount APPLE241 --json
//! ```
//!
//! Receipt formatting can be changed with the `BASKET_*` variables read by
//! `ReceiptConfig::from_env`.

use std::env;
use std::sync::Arc;

use basket_core::{Basket, CoreError, CoreResult, Product, ReceiptConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Demo catalog: (code, name, price in pence).
const CATALOG: &[(&str, &str, i64)] = &[
    ("f1", "Apple", 50),
    ("f2", "Banana", 30),
    ("f3", "Pear", 40),
    ("d1", "Cola", 100),
    ("s1", "Cheese sandwich", 150),
    ("s2", "Chicken wrap", 200),
];

/// Basket used when no items are given on the command line.
const DEFAULT_ITEMS: &[&str] = &["f1x4", "f3"];
const DEFAULT_DISCOUNTS: &[&str] = &["APPLE241", "BDD"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut items = Vec::new();
    let mut discounts = Vec::new();
    let mut print_json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--discount" | "-d" => {
                if let Some(code) = args.get(i + 1) {
                    discounts.push(code.clone());
                    i += 1;
                } else {
                    warn!("--discount needs a code");
                }
            }
            "--json" => print_json = true,
            "--help" | "-h" => {
                println!("Usage: basket-demo [CODE|CODExQTY]... [--discount CODE]... [--json]");
                return Ok(());
            }
            item => items.push(item.to_string()),
        }
        i += 1;
    }

    if items.is_empty() && discounts.is_empty() {
        items = DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect();
        discounts = DEFAULT_DISCOUNTS.iter().map(|s| s.to_string()).collect();
    }

    let catalog = load_catalog()?;
    let mut basket = Basket::new();

    for item in &items {
        let (code, quantity) = parse_item(item);
        let product = catalog
            .iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| CoreError::ProductNotFound(code.to_string()))?;
        basket.add_product_quantity(product, quantity);
    }

    for code in &discounts {
        basket.add_discount(code);
    }

    let totals = basket.totals();
    info!(
        subtotal = %totals.subtotal,
        discount = %totals.discount,
        net = %totals.net,
        "basket priced"
    );

    print!("{}", basket.receipt_with(&ReceiptConfig::from_env()));

    if print_json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,basket_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog() -> CoreResult<Vec<Arc<Product>>> {
    CATALOG
        .iter()
        .map(|&(code, name, price)| -> CoreResult<Arc<Product>> {
            Ok(Arc::new(Product::new(code, name, price)?))
        })
        .collect()
}

/// Splits `f1x3` into `("f1", 3)`; a bare code means one unit.
fn parse_item(item: &str) -> (&str, i64) {
    let (Some(code), Some(rest)) = (item.get(..2), item.get(2..)) else {
        return (item, 1);
    };

    if rest.is_empty() {
        return (code, 1);
    }

    let Some(qty) = rest.strip_prefix('x') else {
        return (item, 1);
    };

    match qty.parse() {
        Ok(qty) => (code, qty),
        Err(_) => {
            warn!(item, "unparsable quantity, using 1");
            (code, 1)
        }
    }
}
