use std::ffi::OsString;

use clap::Parser;

#[derive(Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Anything passed on the command line; never interpreted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<OsString>,
}
