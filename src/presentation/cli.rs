// Command line interface
use crate::domain::dashboard::DashboardSelection;
use clap::Parser;
use clap::error::ErrorKind;

pub const USAGE_EXIT_CODE: i32 = 1;

#[derive(Debug, Parser)]
#[command(name = "dashboard-render", version)]
#[command(about = "Render CloudWatch dashboards to a static HTML page on stdout")]
pub struct Cli {
    /// Dashboard to render; omit it or pass `all` to render every dashboard
    pub dashboard: Option<String>,
}

impl Cli {
    /// Parse the process arguments. Usage errors print the syntax and exit
    /// with status 1 before anything touches the network.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) => {
                let _ = e.print();
                std::process::exit(exit_code(&e));
            }
        }
    }

    pub fn selection(&self) -> DashboardSelection {
        DashboardSelection::from_arg(self.dashboard.clone())
    }
}

/// Help and version requests succeed; anything else is a usage error.
fn exit_code(error: &clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => USAGE_EXIT_CODE,
    }
}
