use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile whose `server` entry names the backend. Default is 'default'.
    /// A missing profile falls back to the built-in backend address.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Backend base URL, overriding the profile
    #[clap(short = 's', long, help = "backend base URL")]
    server: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    server: Option<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            server: args.server,
        }
    }
}
