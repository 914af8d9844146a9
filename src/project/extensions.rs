//! Project-level extensions contributed by plugins

/// Arguments passed to `runSVUnit` on every invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSvunitToolChain {
    args: Vec<String>,
}

impl RunSvunitToolChain {
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn add_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// The `toolChains` extension added by the SVUnit plugin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolChains {
    pub run_svunit: RunSvunitToolChain,
}
