use clap::Parser;
use ttviz::app::TtvizCliArguments;

fn main() {
    env_logger::init();
    let args = TtvizCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running ttviz: {e}");
            std::process::exit(1);
        }
    }
}
