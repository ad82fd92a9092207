use anyhow::Result;
use std::env;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::Registry;
use tracing_tree::HierarchicalLayer;

const USAGE: &str = "Usage: plot-mesh [options]";

fn main() -> Result<()> {
    let options = meshplot_tools::options();
    let matches = match meshplot_tools::parse_args(&options, USAGE, env::args().skip(1), 0)? {
        Some(matches) => matches,
        None => return Ok(()),
    };

    let registry = Registry::default().with(EnvFilter::from_env("LOG")).with(
        HierarchicalLayer::new(4)
            .with_targets(true)
            .with_bracketed_fields(true),
    );
    let _chrome_trace_guard = match matches.opt_str("t") {
        Some(filename) => {
            let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
                .file(filename)
                .build();
            registry.with(chrome_layer).init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    let config = meshplot_tools::Config::from_matches(&matches);
    meshplot_tools::run(&config)
}
