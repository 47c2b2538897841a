use fmm_args::{init_logging, Args, SUMMARY_WIDTH};
use tracing::{debug, error, warn};

fn main() {
    let args = Args::parse_or_exit();
    init_logging(args.verbose());

    if !args.ignored().is_empty() {
        warn!(
            "Ignoring {} argument(s) after the options: {}",
            args.ignored().len(),
            args.ignored().join(" ")
        );
    }

    if let Err(e) = args.print_summary(SUMMARY_WIDTH) {
        error!("Failed to print configuration summary: {e}");
        std::process::exit(1);
    }
    debug!("Configuration ready for a {}-thread run", args.threads());
}
