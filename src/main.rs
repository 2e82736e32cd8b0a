use clap::Parser;
use quake_rows::adapters::browser;
use quake_rows::core::ConfigProvider;
use quake_rows::utils::{logger, validation::Validate};
use quake_rows::{CliConfig, HtmlPage, MemoryDocument, ReqwestClient, RowFetcher, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.json_logs);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve().and_then(|settings| {
        settings.validate()?;
        Ok(settings)
    }) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            // 配置錯誤 1，其餘（例如讀不到設定檔）2
            std::process::exit(if e.is_config_error() { 1 } else { 2 });
        }
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let client = ReqwestClient::new(settings.base_url())?;
    tracing::debug!("Rows endpoint: {}", client.resolve(settings.resource_path())?);
    tracing::info!("Fetching rows from {}", client.base_url());

    match settings.page.clone() {
        Some(page_path) => {
            render_into_page(client, &settings, page_path).await;
        }
        None => {
            let document = MemoryDocument::with_elements([settings.target_id.as_str()]);
            let fetcher = RowFetcher::from_config(client, document, &settings);
            fetcher.fetch_and_render().await;

            if let Some(rows) = fetcher.document().inner_html(&settings.target_id).await {
                println!("{}", rows);
            }
        }
    }

    Ok(())
}

async fn render_into_page(client: ReqwestClient, settings: &Settings, page_path: std::path::PathBuf) {
    if !tokio::fs::try_exists(&page_path).await.unwrap_or(false) {
        tracing::warn!("Page {} does not exist, nothing will be rendered", page_path.display());
    }

    let page = HtmlPage::new(page_path.clone());
    let fetcher = RowFetcher::from_config(client, page, settings);
    fetcher.fetch_and_render().await;
    tracing::info!("Render pass finished for {}", fetcher.document().path().display());

    if settings.open_browser {
        browser::open_page(&page_path);
    }
}
