use teacup_viz::{run_app, TeacupConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_app(TeacupConfig::default())
}
