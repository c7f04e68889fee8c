//! Account and asset filters for the swap form.

use uuid::Uuid;

use crate::errors::Result;
use crate::models::{Account, SwapAsset};
use crate::utils::{balance_covers_amount, parse_decimal_amount, DecimalAmount};
use crate::wallet::WalletSupport;

/// Accounts that can pay `from_amount` of `from_asset` in a swap.
///
/// An account is kept when its wallet type has a signing step in `wallets`,
/// it holds `from_asset` (matched by uuid), and its balance converted with the
/// asset's decimals is at least `from_amount`. Input order is preserved.
///
/// Only the principal is checked. Network fees are not included in the
/// sufficiency check.
///
/// # Errors
///
/// Returns `ConversionError::InvalidDecimalAmount` if `from_amount` is not a
/// non-negative decimal number. Validation happens before the iterator is
/// returned.
pub fn filter_accounts_by_swap_eligibility<'a, W>(
    accounts: &'a [Account],
    wallets: &'a W,
    from_asset: &SwapAsset,
    from_amount: &str,
) -> Result<impl Iterator<Item = &'a Account> + Clone + 'a>
where
    W: WalletSupport + ?Sized + 'a,
{
    let amount = parse_decimal_amount(from_amount)?;
    let from_asset = from_asset.clone();

    Ok(accounts
        .iter()
        .filter(move |account| is_swap_eligible(account, wallets, &from_asset, &amount)))
}

// TODO: subtract the estimated network fee from base-asset balances once fee
// estimates are available alongside the raw transaction.
fn is_swap_eligible<W>(account: &Account, wallets: &W, from_asset: &SwapAsset, amount: &DecimalAmount) -> bool
where
    W: WalletSupport + ?Sized,
{
    if !wallets.supports(account.wallet) {
        tracing::debug!(
            address = %account.address,
            wallet = %account.wallet,
            "Account excluded: wallet cannot sign swaps"
        );
        return false;
    }

    let Some(held) = account.held_asset(&from_asset.uuid) else {
        tracing::debug!(
            address = %account.address,
            asset = %from_asset.ticker,
            "Account excluded: asset not held"
        );
        return false;
    };

    if !balance_covers_amount(&held.balance, held.asset.decimal, amount) {
        tracing::debug!(
            address = %account.address,
            asset = %from_asset.ticker,
            balance = %held.balance,
            "Account excluded: insufficient balance"
        );
        return false;
    }

    true
}

/// Assets not already selected on either side of the swap.
///
/// When either side is unset every asset is returned. Otherwise both selected
/// assets are removed by uuid. Input order is preserved.
pub fn filter_unselected_assets<'a>(
    assets: &'a [SwapAsset],
    from_asset: Option<&SwapAsset>,
    to_asset: Option<&SwapAsset>,
) -> impl Iterator<Item = &'a SwapAsset> + Clone + 'a {
    let selected: Option<[Uuid; 2]> = from_asset
        .zip(to_asset)
        .map(|(from, to)| [from.uuid, to.uuid]);

    assets
        .iter()
        .filter(move |asset| selected.map_or(true, |selected| !selected.contains(&asset.uuid)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ConversionError, SwapError};
    use crate::models::fixtures::*;
    use crate::models::HeldAsset;
    use crate::wallet::{SigningStep, WalletId, WalletRegistry};
    use num_bigint::BigUint;

    const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

    fn uuids<'a>(accounts: impl Iterator<Item = &'a Account>) -> Vec<uuid::Uuid> {
        accounts.map(|account| account.uuid).collect()
    }

    #[test]
    fn test_filter_accounts_by_swap_eligibility() {
        let registry = WalletRegistry::default();
        let rich = account(WalletId::Web3, vec![(eth(), 3 * ONE_ETHER)]);
        let poor = account(WalletId::Web3, vec![(eth(), ONE_ETHER / 2)]);
        let no_eth = account(WalletId::Trezor, vec![(dai(), 5 * ONE_ETHER)]);
        let hardware = account(WalletId::LedgerNanoS, vec![(dai(), ONE_ETHER), (eth(), 2 * ONE_ETHER)]);
        let accounts = vec![rich.clone(), poor, no_eth, hardware.clone()];

        let eligible = filter_accounts_by_swap_eligibility(&accounts, &registry, &SwapAsset::from(&eth()), "1.25").unwrap();

        assert_eq!(uuids(eligible), vec![rich.uuid, hardware.uuid]);
    }

    #[test]
    fn test_unsupported_wallet_excluded_regardless_of_balance() {
        let registry = WalletRegistry::default();
        let accounts = vec![
            account(WalletId::ViewOnly, vec![(eth(), 1000 * ONE_ETHER)]),
            account(WalletId::PrivateKey, vec![(eth(), 1000 * ONE_ETHER)]),
        ];

        let eligible = filter_accounts_by_swap_eligibility(&accounts, &registry, &SwapAsset::from(&eth()), "0").unwrap();

        assert_eq!(eligible.count(), 0);
    }

    #[test]
    fn test_custom_wallet_support_is_respected() {
        let registry = WalletRegistry::empty().with_step(WalletId::PrivateKey, SigningStep::Web3);
        let accounts = vec![
            account(WalletId::PrivateKey, vec![(eth(), ONE_ETHER)]),
            account(WalletId::Web3, vec![(eth(), ONE_ETHER)]),
        ];

        let eligible: Vec<_> = filter_accounts_by_swap_eligibility(&accounts, &registry, &SwapAsset::from(&eth()), "1")
            .unwrap()
            .collect();

        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].wallet, WalletId::PrivateKey);
    }

    #[test]
    fn test_exact_balance_is_sufficient() {
        let registry = WalletRegistry::default();
        let accounts = vec![account(WalletId::Walletconnect, vec![(usdc(), 12_340_000)])];

        let exact = filter_accounts_by_swap_eligibility(&accounts, &registry, &SwapAsset::from(&usdc()), "12.34").unwrap();
        assert_eq!(exact.count(), 1);

        let over = filter_accounts_by_swap_eligibility(&accounts, &registry, &SwapAsset::from(&usdc()), "12.340001").unwrap();
        assert_eq!(over.count(), 0);
    }

    #[test]
    fn test_asset_matched_by_uuid_not_ticker() {
        let registry = WalletRegistry::default();
        let mut impostor = dai();
        impostor.uuid = uuid::Uuid::new_v4();
        let mut acc = account(WalletId::Web3, vec![]);
        acc.assets.push(HeldAsset::new(impostor, BigUint::from(ONE_ETHER)));
        let accounts = vec![acc];

        let eligible = filter_accounts_by_swap_eligibility(&accounts, &registry, &SwapAsset::from(&dai()), "1").unwrap();

        assert_eq!(eligible.count(), 0);
    }

    #[test]
    fn test_eligibility_iterator_is_restartable() {
        let registry = WalletRegistry::default();
        let accounts = vec![
            account(WalletId::Web3, vec![(eth(), ONE_ETHER)]),
            account(WalletId::Metamask, vec![(eth(), ONE_ETHER)]),
        ];

        let eligible = filter_accounts_by_swap_eligibility(&accounts, &registry, &SwapAsset::from(&eth()), "1").unwrap();
        let first_pass = uuids(eligible.clone());
        let second_pass = uuids(eligible);

        assert_eq!(first_pass.len(), 2);
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_malformed_amount_is_an_error() {
        let registry = WalletRegistry::default();
        let accounts = vec![account(WalletId::Web3, vec![(eth(), ONE_ETHER)])];

        let result = filter_accounts_by_swap_eligibility(&accounts, &registry, &SwapAsset::from(&eth()), "-1");

        assert!(matches!(
            result.map(|eligible| eligible.count()),
            Err(SwapError::Conversion(ConversionError::InvalidDecimalAmount { .. }))
        ));
    }

    #[test]
    fn test_filter_unselected_assets() {
        let a = SwapAsset::from(&eth());
        let b = SwapAsset::from(&dai());
        let c = SwapAsset::from(&usdc());
        let assets = vec![a.clone(), b.clone(), c.clone()];

        let remaining: Vec<_> = filter_unselected_assets(&assets, Some(&a), Some(&c)).cloned().collect();
        assert_eq!(remaining, vec![b.clone()]);

        let remaining: Vec<_> = filter_unselected_assets(&assets, Some(&b), Some(&b)).cloned().collect();
        assert_eq!(remaining, vec![a.clone(), c.clone()]);
    }

    #[test]
    fn test_filter_unselected_assets_with_missing_side() {
        let a = SwapAsset::from(&eth());
        let b = SwapAsset::from(&dai());
        let c = SwapAsset::from(&usdc());
        let assets = vec![a.clone(), b.clone(), c.clone()];

        let remaining: Vec<_> = filter_unselected_assets(&assets, None, Some(&c)).cloned().collect();
        assert_eq!(remaining, assets);

        let remaining: Vec<_> = filter_unselected_assets(&assets, Some(&a), None).cloned().collect();
        assert_eq!(remaining, assets);
    }
}
