multiversx_sc::imports!();

use crate::errors::ERR_OPERATION_IN_PROGRESS;

/// Rejects a staking operation started while another one is still open,
/// e.g. from a callback triggered by the token interaction.
#[multiversx_sc::module]
pub trait ReentrancyGuardModule {
    /// Must be paired with `exit_operation` on the success path. A failed
    /// transaction never leaves the flag set: the VM reverts it with every
    /// other storage write.
    fn enter_operation(&self) {
        require!(
            !self.operation_in_progress().get(),
            ERR_OPERATION_IN_PROGRESS
        );
        self.operation_in_progress().set(true);
    }

    fn exit_operation(&self) {
        self.operation_in_progress().clear();
    }

    #[storage_mapper("operationInProgress")]
    fn operation_in_progress(&self) -> SingleValueMapper<bool>;
}
