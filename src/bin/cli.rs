// src/bin/cli.rs
use quotes_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    quotes_scrape::log::init();

    let summary = cli::run()?;
    println!(
        "\n✅ Finished scraping: {} quotes, {} authors, {} tags. See \"{}\".",
        summary.main.quotes.len(),
        summary.main.authors.len(),
        summary.tags.len(),
        summary.out.root().display()
    );
    Ok(())
}
