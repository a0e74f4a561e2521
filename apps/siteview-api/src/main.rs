use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = siteview_api::Args::parse();
	siteview_api::run(args).await
}
