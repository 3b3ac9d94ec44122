//! catalog-rank: rank the top products of a catalog category

use anyhow::Result;

fn main() -> Result<()> {
    catalog_rank::cli::run()
}
