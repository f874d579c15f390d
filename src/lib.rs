#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{
	dispatch::{DispatchError, DispatchResult},
	ensure,
	traits::{fungible::Transfer, UnixTime},
};
pub use pallet::*;
pub use parachain::{reverse256, truncate20, Truncate20};
use sp_core::Get;
use sp_runtime::traits::{AccountIdConversion, CheckedAdd, Convert, Saturating, Zero};
pub use traits::{Reporter, SendXcm, Transactor};
use types::*;
pub use types::{
	Address, CallIndices, DisputeId, ParaId, Parachain, StakeInfo, StakeStatus, VoteResult,
	Weights,
};

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

pub mod constants;
mod impls;
mod parachain;
pub mod traits;
mod types;
pub mod xcm;

pub(crate) const LOG_TARGET: &str = "runtime::tellor-controller";

#[frame_support::pallet(dev_mode)]
pub mod pallet {
	use super::{constants::WITHDRAWAL_PERIOD, *};
	use ::xcm::latest::MultiLocation;
	use frame_support::{
		pallet_prelude::*,
		sp_runtime::traits::{AtLeast32BitUnsigned, MaybeSerializeDeserialize},
		traits::fungible::Inspect,
		PalletId,
	};
	use frame_system::pallet_prelude::*;
	use sp_core::U256;
	use sp_std::prelude::*;

	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	/// Configure the pallet by specifying the parameters and types on which it depends.
	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// Because this pallet emits events, it depends on the runtime's definition of an event.
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// Conversion of a local account into the staker address reported to oracle parachains.
		type AccountIdToAddress: Convert<Self::AccountId, Address>;

		/// The units in which stake is recorded.
		type Balance: Member
			+ Parameter
			+ AtLeast32BitUnsigned
			+ Default
			+ Copy
			+ MaybeSerializeDeserialize
			+ MaxEncodedLen
			+ Into<U256>;

		/// Call indices of the oracle pallet dispatchables on registered parachains.
		#[pallet::constant]
		type CallIndices: Get<CallIndices>;

		/// Origin permitted to set the governance account.
		type InitOrigin: EnsureOrigin<Self::RuntimeOrigin>;

		/// Derivation of the local account controlled by a remote location.
		type LocationToAccount: xcm_executor::traits::Convert<MultiLocation, Self::AccountId>;

		/// The maximum length of a reporter account on an oracle parachain.
		#[pallet::constant]
		type MaxAccountLength: Get<u32>;

		/// The identifier of the pallet within the runtime, used to derive the staking account.
		#[pallet::constant]
		type PalletId: Get<PalletId>;

		/// The on-chain time provider.
		type Time: UnixTime;

		/// The token staked by reporters.
		type Token: Inspect<Self::AccountId, Balance = Self::Balance> + Transfer<Self::AccountId>;

		/// Dispatches calls to oracle parachains.
		type Transactor: traits::Transactor;
	}

	// Registry
	#[pallet::storage]
	pub type Owners<T> = StorageMap<_, Blake2_128Concat, AccountIdOf<T>, ParaId>;
	#[pallet::storage]
	pub type Registrations<T> = StorageMap<_, Blake2_128Concat, ParaId, ParachainOf<T>>;
	// Staking
	#[pallet::storage]
	pub type Governance<T> = StorageValue<_, AccountIdOf<T>>;
	#[pallet::storage]
	pub type StakerDetails<T> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		ParaId,
		Blake2_128Concat,
		AccountIdOf<T>,
		StakeInfoOf<T>,
	>;
	#[pallet::storage]
	pub type ToWithdraw<T> = StorageValue<_, BalanceOf<T>, ValueQuery>;
	#[pallet::storage]
	pub type TotalStakeAmount<T> = StorageMap<_, Blake2_128Concat, ParaId, BalanceOf<T>, ValueQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		// Registry
		ParachainRegistered {
			para_id: ParaId,
			owner: AccountIdOf<T>,
		},
		// Staking
		GovernanceSet {
			governance: AccountIdOf<T>,
		},
		ReporterSlashed {
			para_id: ParaId,
			reporter: AccountIdOf<T>,
			recipient: AccountIdOf<T>,
			amount: BalanceOf<T>,
		},
		StakeDeposited {
			para_id: ParaId,
			staker: AccountIdOf<T>,
			account: RemoteAccountOf<T>,
			amount: BalanceOf<T>,
		},
		StakeWithdrawn {
			para_id: ParaId,
			staker: AccountIdOf<T>,
			amount: BalanceOf<T>,
		},
		StakeWithdrawRequested {
			para_id: ParaId,
			staker: AccountIdOf<T>,
			amount: BalanceOf<T>,
		},
		// Governance
		VoteExecuted {
			para_id: ParaId,
			dispute_id: DisputeId,
		},
		VoteTallied {
			para_id: ParaId,
			dispute_id: DisputeId,
			outcome: VoteResult,
		},
	}

	#[pallet::error]
	pub enum Error<T> {
		/// The reporter account differs from the one holding the staker's existing stake.
		AccountMismatch,
		/// Governance has already been set.
		AlreadyInitialized,
		/// Staked balance is insufficient.
		InsufficientStake,
		/// The reporter account exceeds the maximum length.
		MaxAccountLengthExceeded,
		/// No withdrawal has been requested.
		NoWithdrawalRequested,
		/// The parachain is not registered.
		NotRegistered,
		/// Weight or fee calculation overflowed.
		Overflow,
		/// Token transfer failed.
		TransferFailed,
		/// The call could not be dispatched to the parachain.
		TransportFailed,
		/// The caller is not permitted to perform the operation.
		Unauthorized,
		/// The withdrawal period has not yet passed.
		WithdrawalPeriodPending,
		/// The amount must be greater than zero.
		ZeroAmount,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Sets the governance account, which is permitted to slash reporters and report votes.
		///
		/// - `governance`: The governance account.
		#[pallet::call_index(0)]
		pub fn init(origin: OriginFor<T>, governance: AccountIdOf<T>) -> DispatchResult {
			T::InitOrigin::ensure_origin(origin)?;
			ensure!(!<Governance<T>>::exists(), Error::<T>::AlreadyInitialized);
			<Governance<T>>::set(Some(governance.clone()));
			Self::deposit_event(Event::GovernanceSet { governance });
			Ok(())
		}

		/// Registers (or updates the registration of) an oracle parachain.
		///
		/// The caller must be the account derived from the location of the oracle pallet on the
		/// parachain, so only the parachain itself is able to register.
		///
		/// - `para_id`: The parachain identifier.
		/// - `pallet_instance`: The index of the oracle pallet within the parachain runtime.
		/// - `weight_to_fee`: Price of a single unit of weight on the parachain.
		/// - `fee_location`: The asset location used to pay for execution on the parachain.
		/// - `weights`: Benchmarked weights of the oracle pallet dispatchables.
		#[pallet::call_index(1)]
		pub fn register(
			origin: OriginFor<T>,
			para_id: ParaId,
			pallet_instance: u8,
			weight_to_fee: U256,
			fee_location: Box<MultiLocation>,
			weights: Weights,
		) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			let derived = <T::LocationToAccount as xcm_executor::traits::Convert<_, _>>::convert(
				xcm::pallet(para_id, pallet_instance),
			)
			.map_err(|_| Error::<T>::Unauthorized)?;
			ensure!(caller == derived, Error::<T>::Unauthorized);

			<Registrations<T>>::insert(
				para_id,
				Parachain {
					id: para_id,
					owner: caller.clone(),
					pallet_instance,
					weight_to_fee,
					fee_location: *fee_location,
					weights,
				},
			);
			<Owners<T>>::insert(&caller, para_id);
			Self::deposit_event(Event::ParachainRegistered { para_id, owner: caller });
			Ok(())
		}

		/// Deposits stake for reporting to an oracle parachain.
		///
		/// Any amount locked for withdrawal is staked again first, with only the remainder
		/// transferred from the caller.
		///
		/// - `para_id`: The parachain identifier.
		/// - `account`: The reporter account on the parachain.
		/// - `amount`: The amount to stake.
		#[pallet::call_index(2)]
		pub fn deposit_stake(
			origin: OriginFor<T>,
			para_id: ParaId,
			account: Vec<u8>,
			amount: BalanceOf<T>,
		) -> DispatchResult {
			let staker = ensure_signed(origin)?;
			let parachain = Self::get_by_id(para_id).ok_or(Error::<T>::NotRegistered)?;
			let account: RemoteAccountOf<T> =
				account.try_into().map_err(|_| Error::<T>::MaxAccountLengthExceeded)?;
			ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

			let mut stake_info = <StakerDetails<T>>::get(para_id, &staker).unwrap_or(StakeInfo {
				account: account.clone(),
				start_date: 0,
				staked_balance: Zero::zero(),
				locked_balance: Zero::zero(),
			});
			// The reporter account can only change once all stake has been withdrawn
			if stake_info.account != account {
				ensure!(
					stake_info.staked_balance.is_zero() && stake_info.locked_balance.is_zero(),
					Error::<T>::AccountMismatch
				);
				stake_info.account = account.clone();
			}
			let restaked = stake_info.locked_balance.min(amount);
			if !restaked.is_zero() {
				stake_info.locked_balance.saturating_reduce(restaked);
				<ToWithdraw<T>>::mutate(|locked| locked.saturating_reduce(restaked));
			}
			let remainder = amount.saturating_sub(restaked);
			if !remainder.is_zero() {
				T::Token::transfer(&staker, &Self::staking(), remainder, true)
					.map_err(|_| Error::<T>::TransferFailed)?;
			}
			stake_info.staked_balance =
				stake_info.staked_balance.checked_add(&amount).ok_or(Error::<T>::Overflow)?;
			stake_info.start_date = Self::now();
			<TotalStakeAmount<T>>::try_mutate(para_id, |total| -> DispatchResult {
				*total = total.checked_add(&amount).ok_or(Error::<T>::Overflow)?;
				Ok(())
			})?;
			<StakerDetails<T>>::insert(para_id, &staker, &stake_info);

			<Self as Reporter<_, _>>::report_stake_deposited(
				&parachain,
				&stake_info.account,
				stake_info.staked_balance,
				T::AccountIdToAddress::convert(staker.clone()),
			)?;
			Self::deposit_event(Event::StakeDeposited { para_id, staker, account, amount });
			Ok(())
		}

		/// Locks staked tokens for withdrawal, starting the withdrawal period.
		///
		/// - `para_id`: The parachain identifier.
		/// - `amount`: The amount to withdraw.
		#[pallet::call_index(3)]
		pub fn request_stake_withdraw(
			origin: OriginFor<T>,
			para_id: ParaId,
			amount: BalanceOf<T>,
		) -> DispatchResult {
			let staker = ensure_signed(origin)?;
			let parachain = Self::get_by_id(para_id).ok_or(Error::<T>::NotRegistered)?;
			ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

			let stake_info = <StakerDetails<T>>::try_mutate(
				para_id,
				&staker,
				|maybe| -> Result<StakeInfoOf<T>, DispatchError> {
					let stake_info = maybe.as_mut().ok_or(Error::<T>::InsufficientStake)?;
					ensure!(stake_info.staked_balance >= amount, Error::<T>::InsufficientStake);
					stake_info.staked_balance.saturating_reduce(amount);
					stake_info.locked_balance = stake_info
						.locked_balance
						.checked_add(&amount)
						.ok_or(Error::<T>::Overflow)?;
					stake_info.start_date = Self::now();
					Ok(stake_info.clone())
				},
			)?;
			<TotalStakeAmount<T>>::mutate(para_id, |total| total.saturating_reduce(amount));
			<ToWithdraw<T>>::try_mutate(|locked| -> DispatchResult {
				*locked = locked.checked_add(&amount).ok_or(Error::<T>::Overflow)?;
				Ok(())
			})?;

			<Self as Reporter<_, _>>::report_staking_withdraw_request(
				&parachain,
				&stake_info.account,
				amount,
				T::AccountIdToAddress::convert(staker.clone()),
			)?;
			Self::deposit_event(Event::StakeWithdrawRequested { para_id, staker, amount });
			Ok(())
		}

		/// Withdraws locked tokens once the withdrawal period has passed.
		///
		/// - `para_id`: The parachain identifier.
		#[pallet::call_index(4)]
		pub fn withdraw_stake(origin: OriginFor<T>, para_id: ParaId) -> DispatchResult {
			let staker = ensure_signed(origin)?;
			let parachain = Self::get_by_id(para_id).ok_or(Error::<T>::NotRegistered)?;

			let mut stake_info = <StakerDetails<T>>::get(para_id, &staker)
				.filter(|s| !s.locked_balance.is_zero())
				.ok_or(Error::<T>::NoWithdrawalRequested)?;
			ensure!(
				Self::now().saturating_sub(stake_info.start_date) >= WITHDRAWAL_PERIOD,
				Error::<T>::WithdrawalPeriodPending
			);
			let amount = stake_info.locked_balance;
			T::Token::transfer(&Self::staking(), &staker, amount, false)
				.map_err(|_| Error::<T>::TransferFailed)?;
			stake_info.locked_balance = Zero::zero();
			<ToWithdraw<T>>::mutate(|locked| locked.saturating_reduce(amount));
			<StakerDetails<T>>::insert(para_id, &staker, &stake_info);

			<Self as Reporter<_, _>>::report_stake_withdrawn(
				&parachain,
				&stake_info.account,
				amount,
			)?;
			Self::deposit_event(Event::StakeWithdrawn { para_id, staker, amount });
			Ok(())
		}

		/// Slashes a reporter, transferring the slashed tokens to the recipient.
		///
		/// Tokens locked for withdrawal are slashed before staked tokens.
		///
		/// - `para_id`: The parachain identifier.
		/// - `reporter`: The reporter to slash.
		/// - `recipient`: The recipient of the slashed tokens.
		/// - `amount`: The maximum amount to slash.
		#[pallet::call_index(5)]
		pub fn slash_reporter(
			origin: OriginFor<T>,
			para_id: ParaId,
			reporter: AccountIdOf<T>,
			recipient: AccountIdOf<T>,
			amount: BalanceOf<T>,
		) -> DispatchResult {
			Self::ensure_governance(origin)?;
			let parachain = Self::get_by_id(para_id).ok_or(Error::<T>::NotRegistered)?;

			let mut stake_info = <StakerDetails<T>>::get(para_id, &reporter)
				.ok_or(Error::<T>::InsufficientStake)?;
			let from_locked = stake_info.locked_balance.min(amount);
			let from_staked = stake_info.staked_balance.min(amount.saturating_sub(from_locked));
			let slashed = from_locked.saturating_add(from_staked);
			ensure!(!slashed.is_zero(), Error::<T>::InsufficientStake);

			stake_info.locked_balance.saturating_reduce(from_locked);
			stake_info.staked_balance.saturating_reduce(from_staked);
			<ToWithdraw<T>>::mutate(|locked| locked.saturating_reduce(from_locked));
			<TotalStakeAmount<T>>::mutate(para_id, |total| total.saturating_reduce(from_staked));
			T::Token::transfer(&Self::staking(), &recipient, slashed, false)
				.map_err(|_| Error::<T>::TransferFailed)?;
			<StakerDetails<T>>::insert(para_id, &reporter, &stake_info);

			<Self as Reporter<_, _>>::report_slash(&parachain, &stake_info.account, slashed)?;
			Self::deposit_event(Event::ReporterSlashed {
				para_id,
				reporter,
				recipient,
				amount: slashed,
			});
			Ok(())
		}

		/// Reports the tally of a dispute vote to an oracle parachain.
		///
		/// - `para_id`: The parachain identifier.
		/// - `dispute_id`: The identifier of the dispute.
		/// - `outcome`: The result of the vote.
		#[pallet::call_index(6)]
		pub fn report_vote_tallied(
			origin: OriginFor<T>,
			para_id: ParaId,
			dispute_id: DisputeId,
			outcome: VoteResult,
		) -> DispatchResult {
			Self::ensure_governance(origin)?;
			let parachain = Self::get_by_id(para_id).ok_or(Error::<T>::NotRegistered)?;
			<Self as Reporter<_, _>>::report_vote_tallied(&parachain, dispute_id, outcome)?;
			Self::deposit_event(Event::VoteTallied { para_id, dispute_id, outcome });
			Ok(())
		}

		/// Reports the execution of a dispute vote to an oracle parachain.
		///
		/// - `para_id`: The parachain identifier.
		/// - `dispute_id`: The identifier of the dispute.
		#[pallet::call_index(7)]
		pub fn report_vote_executed(
			origin: OriginFor<T>,
			para_id: ParaId,
			dispute_id: DisputeId,
		) -> DispatchResult {
			Self::ensure_governance(origin)?;
			let parachain = Self::get_by_id(para_id).ok_or(Error::<T>::NotRegistered)?;
			<Self as Reporter<_, _>>::report_vote_executed(&parachain, dispute_id)?;
			Self::deposit_event(Event::VoteExecuted { para_id, dispute_id });
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	/// Returns the registration of a parachain, if registered.
	/// # Arguments
	/// * `para_id` - The parachain identifier.
	pub fn get_by_id(para_id: ParaId) -> Option<ParachainOf<T>> {
		<Registrations<T>>::get(para_id)
	}

	/// Returns the registration owned by an account, if any.
	///
	/// An account which registered a parachain since re-registered by another owner no longer
	/// resolves.
	/// # Arguments
	/// * `address` - The account which registered the parachain.
	pub fn get_by_address(address: &AccountIdOf<T>) -> Option<ParachainOf<T>> {
		<Owners<T>>::get(address)
			.and_then(Self::get_by_id)
			.filter(|parachain| &parachain.owner == address)
	}

	/// Returns the staking state of a staker on a parachain.
	pub fn get_stake_info(
		para_id: ParaId,
		staker: &AccountIdOf<T>,
	) -> (StakeStatus, Option<StakeInfoOf<T>>) {
		let stake_info = <StakerDetails<T>>::get(para_id, staker);
		(StakeInfo::status(stake_info.as_ref()), stake_info)
	}

	/// The account identifier which holds staked tokens.
	pub fn staking() -> AccountIdOf<T> {
		T::PalletId::get().into_account_truncating()
	}

	fn ensure_governance(origin: T::RuntimeOrigin) -> DispatchResult {
		let caller = frame_system::ensure_signed(origin)?;
		ensure!(<Governance<T>>::get().as_ref() == Some(&caller), Error::<T>::Unauthorized);
		Ok(())
	}

	fn now() -> Timestamp {
		T::Time::now().as_secs()
	}
}
