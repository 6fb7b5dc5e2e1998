//! Runnable cart demo.
//!
//! Drives a persisted cart from the command line and plays the part of the
//! page around it: a console "frontend" subscribes to the store and prints
//! the count badge, the rendered cart, and any confirmation notices.
//!
//! ```text
//! cargo run --example cart -- add 1 --quantity 2
//! cargo run --example cart -- show
//! cargo run --example cart -- clear
//! ```

use anyhow::Context;
use clap::Parser;
use satchel::{
    fixtures,
    prelude::*,
    utils::{DemoCartArgs, DemoCartCommand},
};
use tracing_subscriber::EnvFilter;

/// Prints every cart change the way a page would re-render it.
struct ConsoleFrontend {
    catalog: Catalog,
}

#[expect(clippy::print_stdout, reason = "Example code")]
impl CartObserver for ConsoleFrontend {
    fn cart_changed(&mut self, cart: &Cart, _change: &CartChange) {
        println!("Cart ({} items)", count_badge(cart));
        println!("{}", render_cart(cart, &self.catalog));
    }

    fn notice(&mut self, notice: &Notice) {
        println!(
            "* {} (shown for {}ms)",
            notice.text(),
            notice.duration().as_millis()
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = DemoCartArgs::parse();

    let catalog = match &args.catalog {
        Some(path) => fixtures::load_catalog(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => fixtures::demo_catalog()?,
    };

    let mut store = CartStore::new(FileStorage::new(&args.data_dir), catalog.clone());
    store.subscribe(Box::new(ConsoleFrontend { catalog }));

    match args.command {
        DemoCartCommand::Show => store.refresh(),
        DemoCartCommand::Add {
            product_id,
            quantity,
        } => {
            let product_id: ProductId = product_id.parse()?;
            store.add(product_id, quantity);
        }
        DemoCartCommand::Remove { product_id } => {
            let product_id: ProductId = product_id.parse()?;
            store.remove(product_id);
        }
        DemoCartCommand::Clear => store.clear(),
    }

    Ok(())
}
