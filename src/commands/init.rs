use super::{Command, CommandInfo, Context};
use crate::error::Result;
use crate::onboard::{InitOptions, Onboarder};

pub(super) const INFO: CommandInfo = CommandInfo {
    name: "init",
    aliases: &["i"],
    description: "Enables your current project(folder) for the Switch Platform.",
};

const NEXT_STEPS: &str = "
    Follow the steps in the getting started page at
    https://refactored-adventure-qkw91lk.pages.github.io/getting-started/

    Step 1: Write Your Build and Unit Test Scripts
    Under the scripts folder, you will find the build.sh and unit-test.sh
    Be sure to fill those out with your build and test commands.

    Step 2: Review Any Additional Resource Configuration
    If you chose an additional resource such as postgres or eventhub,
    you will need to go to .github/environments/<env>-parameters.bicepparam files and update the configs.
    You can find more information about the parameters here
    https://refactored-adventure-qkw91lk.pages.github.io/app-hosting/optional-bicep-parameters/

    Step 3: Push Changes and Switch
    Go ahead and push those changes and give it a switch!

    Happy Switching!
";

/// `switch init`: onboards the current directory.
#[derive(Debug, Clone, Default)]
pub struct InitCommand {
    options: InitOptions,
}

impl InitCommand {
    pub fn new(options: InitOptions) -> Self {
        Self { options }
    }
}

impl Command for InitCommand {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    fn execute(&self, ctx: &Context<'_>) -> Result<()> {
        let onboarder = Onboarder::new(ctx.prompter, ctx.runner, ctx.renderer, ctx.settings);
        let report = onboarder.run(&ctx.project_dir, &self.options)?;
        log::debug!(
            "Onboarded '{}' with {} template failure(s)",
            report.config.repository,
            report.failures.len()
        );

        println!("\nNext Steps:\n{NEXT_STEPS}");
        Ok(())
    }
}
