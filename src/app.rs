//! One launcher invocation, from parsed options to the applied outcome.

use crate::cli::RuntimeOptions;
use crate::error::Result;
use crate::launch::LaunchEnv;
use crate::picker::CommandMenu;
use crate::toggle::{self, Outcome, Request};
use crate::wm::ipc::I3Connection;
use crate::wm::{Verbose, WindowManager};
use i3_quickterm_config::Config;

pub struct App {
    config: Config,
    request: Request,
    env: LaunchEnv,
}

impl App {
    /// Load the configuration and layer the command-line flags on top.
    pub fn new(options: RuntimeOptions) -> Self {
        let config = Config::load(options.config.as_deref()).with_verbose(options.verbose);
        log::debug!(
            "effective config: {}",
            serde_json::to_string(&config).unwrap_or_default()
        );
        Self::with_config(config, options.shell, options.in_place, LaunchEnv::current())
    }

    pub fn with_config(config: Config, shell: Option<String>, in_place: bool, env: LaunchEnv) -> Self {
        Self {
            config,
            request: Request { shell, in_place },
            env,
        }
    }

    /// Decide what to do using `wm`, without applying it.
    pub fn decide(&self, wm: &mut dyn WindowManager) -> Result<Outcome> {
        let mut menu = CommandMenu::from_config(&self.config);
        toggle::run(&self.config, &self.request, wm, &mut menu, &self.env)
    }

    /// Connect to the running window manager, decide and apply.
    ///
    /// Does not return when a terminal or shell is exec'd.
    pub fn run(self) -> Result<()> {
        // Fail on a bad request before touching the IPC socket.
        self.request.validate(&self.config)?;

        let mut connection = I3Connection::connect()?;
        self.run_with(&mut connection)
    }

    /// Decide and apply against `wm`, echoing commands when verbose.
    pub fn run_with(self, wm: &mut dyn WindowManager) -> Result<()> {
        if self.config.verbose {
            self.decide_and_apply(&mut Verbose::new(wm))
        } else {
            self.decide_and_apply(wm)
        }
    }

    fn decide_and_apply(&self, wm: &mut dyn WindowManager) -> Result<()> {
        let outcome = self.decide(wm)?;
        log::debug!("outcome: {outcome:?}");
        outcome.apply(wm, self.config.verbose)
    }
}
