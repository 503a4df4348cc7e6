multiversx_sc::imports!();

use crate::errors::{
    ERR_INSUFFICIENT_CUSTODY, ERR_PAYER_NOT_CALLER, ERR_PAYMENT_AMOUNT_MISMATCH,
    ERR_WRONG_PAYMENT_TOKEN,
};

/// Moves the staked token in and out of the contract's custody.
///
/// Tokens enter as the single ESDT payment attached to the call and leave as
/// a direct ESDT transfer. The ledger never touches balances itself.
#[multiversx_sc::module]
pub trait TokenGatewayModule {
    /// Takes custody of `amount` from `from`, which must be the caller
    /// paying with the staked token.
    fn pull_into(&self, from: &ManagedAddress, amount: &BigUint) {
        require!(
            *from == self.blockchain().get_caller(),
            ERR_PAYER_NOT_CALLER
        );

        let payment = self.call_value().egld_or_single_esdt();
        let staked_token = EgldOrEsdtTokenIdentifier::esdt(self.staked_token().get());
        require!(
            payment.token_identifier == staked_token && payment.token_nonce == 0,
            ERR_WRONG_PAYMENT_TOKEN
        );
        require!(payment.amount == *amount, ERR_PAYMENT_AMOUNT_MISMATCH);
    }

    fn release(&self, to: &ManagedAddress, amount: &BigUint) {
        require!(self.custody_balance() >= *amount, ERR_INSUFFICIENT_CUSTODY);

        let staked_token = self.staked_token().get();
        self.send().direct_esdt(to, &staked_token, 0, amount);
    }

    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        let staked_token = self.staked_token().get();
        self.blockchain().get_esdt_balance(account, &staked_token, 0)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(token)]
    fn token(&self) -> TokenIdentifier {
        self.staked_token().get()
    }

    #[view(custodyBalance)]
    fn custody_balance(&self) -> BigUint {
        self.balance_of(&self.blockchain().get_sc_address())
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("stakedToken")]
    fn staked_token(&self) -> SingleValueMapper<TokenIdentifier>;
}
