use super::{Command, CommandInfo, Context};
use crate::error::{Error, Result};
use crate::process::invoke;
use serde::Deserialize;

pub(super) const INFO: CommandInfo = CommandInfo {
    name: "add-secret",
    aliases: &[],
    description: "Add a secret to Azure Key Vault",
};

/// Options of `switch add-secret`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSecretOptions {
    pub vault_name: String,
    pub name: String,
    pub value: String,
}

/// The parts of `az keyvault secret set` output worth echoing back.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretBundle {
    pub name: String,
    pub vault_uri: Option<String>,
    #[serde(default)]
    pub properties: SecretProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct SecretProperties {
    pub created: Option<String>,
}

/// `switch add-secret`.
#[derive(Debug, Clone)]
pub struct AddSecretCommand {
    options: AddSecretOptions,
}

impl AddSecretCommand {
    pub fn new(options: AddSecretOptions) -> Self {
        Self { options }
    }
}

impl Command for AddSecretCommand {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    fn execute(&self, ctx: &Context<'_>) -> Result<()> {
        let AddSecretOptions { vault_name, name, value } = &self.options;
        println!("\nAdding secret to Azure Key Vault: {vault_name}\n");

        let stdout = invoke(
            ctx.runner,
            "az",
            &["keyvault", "secret", "set", "--vault-name", vault_name, "--name", name, "--value", value],
        )
        .map_err(|message| Error::process("az", format!("Azure CLI command failed: {message}")))?;

        let secret: SecretBundle = serde_json::from_str(&stdout)?;
        println!("Secret added successfully:");
        println!("Name: {}", secret.name);
        println!("Vault: {}", secret.vault_uri.as_deref().unwrap_or("-"));
        println!("Creation Date: {}", secret.properties.created.as_deref().unwrap_or("-"));
        Ok(())
    }
}
