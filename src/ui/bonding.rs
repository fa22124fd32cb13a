//! Bond linking. Not optimistic: nothing is shown until the API answers.

use thiserror::Error;

use crate::context::RitualContext;
use crate::remote::{RemoteError, RitualClient};

#[derive(Debug, Error)]
pub enum BondingError {
    #[error("Bond code is empty")]
    EmptyCode,

    #[error("Bond was not linked (status '{status}')")]
    NotLinked { status: String },

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

pub struct BondingScreen {
    client: RitualClient,
    context: RitualContext,
    code: String,
}

impl BondingScreen {
    pub fn new(client: RitualClient, context: RitualContext) -> Self {
        Self {
            client,
            context,
            code: String::new(),
        }
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn can_submit(&self) -> bool {
        !self.code.trim().is_empty()
    }

    /// Link the entered code and store the resulting bond in the shared context.
    pub async fn link(&self, user_id: &str) -> Result<String, BondingError> {
        if !self.can_submit() {
            return Err(BondingError::EmptyCode);
        }

        let link = self.client.link_bond(self.code.trim(), user_id).await?;
        match link.bond_id {
            Some(bond_id) if link.status == "linked" => {
                tracing::info!(bond_id = %bond_id, "Bond linked");
                self.context.set_bond_id(bond_id.clone());
                Ok(bond_id)
            }
            _ => Err(BondingError::NotLinked {
                status: link.status,
            }),
        }
    }
}
