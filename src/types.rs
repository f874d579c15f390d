// Copyright 2023 Tellor Inc.
// This file is part of Tellor.

// Tellor is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Tellor is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Tellor. If not, see <http://www.gnu.org/licenses/>.

use super::Config;
use frame_support::pallet_prelude::*;
use sp_core::{H160, H256, U256};
use xcm::latest::MultiLocation;

pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
pub type Address = H160;
pub(crate) type BalanceOf<T> = <T as Config>::Balance;
pub type DisputeId = H256;
pub type ParaId = u32;
pub(crate) type ParachainOf<T> = Parachain<AccountIdOf<T>>;
pub(crate) type RemoteAccountOf<T> = BoundedVec<u8, <T as Config>::MaxAccountLength>;
pub(crate) type StakeInfoOf<T> = StakeInfo<BalanceOf<T>, RemoteAccountOf<T>>;
pub type Timestamp = u64;

/// A registered oracle parachain.
#[derive(Clone, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub struct Parachain<AccountId> {
	/// The parachain identifier.
	pub id: ParaId,
	/// The account which registered the parachain, derived from its location.
	pub owner: AccountId,
	/// The index of the oracle pallet within the parachain runtime.
	pub pallet_instance: u8,
	/// Price of a single unit of weight, used to estimate remote execution fees.
	pub weight_to_fee: U256,
	/// The asset location used to pay for remote execution.
	pub fee_location: MultiLocation,
	/// Benchmarked weights of the remote dispatchables.
	pub weights: Weights,
}

/// Benchmarked weights (ref time) of the remote oracle pallet calls.
#[derive(Clone, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct Weights {
	pub report_stake_deposited: u64,
	pub report_staking_withdraw_request: u64,
	pub report_stake_withdrawn: u64,
	pub report_vote_tallied: u64,
	pub report_vote_executed: u64,
	pub report_slash: u64,
}

impl Weights {
	pub fn of(&self, report: Report) -> u64 {
		match report {
			Report::StakeDeposited => self.report_stake_deposited,
			Report::StakeWithdrawRequested => self.report_staking_withdraw_request,
			Report::StakeWithdrawn => self.report_stake_withdrawn,
			Report::VoteTallied => self.report_vote_tallied,
			Report::VoteExecuted => self.report_vote_executed,
			Report::Slash => self.report_slash,
		}
	}
}

/// The remote calls which mirror local events.
#[derive(Clone, Copy, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum Report {
	StakeDeposited,
	StakeWithdrawRequested,
	StakeWithdrawn,
	VoteTallied,
	VoteExecuted,
	Slash,
}

/// Call indices of the remote oracle pallet dispatchables.
///
/// The table is part of the wire contract with the remote pallet: a change in the remote call
/// ordering requires a new version here, deployed alongside it.
#[derive(Clone, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct CallIndices {
	pub report_stake_deposited: u8,
	pub report_staking_withdraw_request: u8,
	pub report_stake_withdrawn: u8,
	pub report_vote_tallied: u8,
	pub report_vote_executed: u8,
	pub report_slash: u8,
}

impl CallIndices {
	pub const V1: CallIndices = CallIndices {
		report_stake_deposited: 0x0D,
		report_staking_withdraw_request: 0x0E,
		report_stake_withdrawn: 0x0F,
		report_vote_tallied: 0x10,
		report_vote_executed: 0x11,
		report_slash: 0x12,
	};

	pub fn of(&self, report: Report) -> u8 {
		match report {
			Report::StakeDeposited => self.report_stake_deposited,
			Report::StakeWithdrawRequested => self.report_staking_withdraw_request,
			Report::StakeWithdrawn => self.report_stake_withdrawn,
			Report::VoteTallied => self.report_vote_tallied,
			Report::VoteExecuted => self.report_vote_executed,
			Report::Slash => self.report_slash,
		}
	}
}

impl Default for CallIndices {
	fn default() -> Self {
		Self::V1
	}
}

/// The outcome of a dispute vote, encoded as a single byte.
#[derive(Clone, Copy, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum VoteResult {
	#[codec(index = 0)]
	Failed,
	#[codec(index = 1)]
	Passed,
	#[codec(index = 2)]
	Invalid,
}

#[derive(Clone, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct StakeInfo<Balance, Account> {
	/// The reporter account on the oracle parachain.
	pub account: Account,
	/// Stake or withdrawal request start date.
	pub start_date: Timestamp,
	/// Staked token balance.
	pub staked_balance: Balance,
	/// Amount locked for withdrawal.
	pub locked_balance: Balance,
}

/// Staking state of a staker on a parachain.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum StakeStatus {
	NoStake,
	Staked,
	WithdrawRequested,
	Withdrawn,
}

impl<Balance: Default + PartialEq, Account> StakeInfo<Balance, Account> {
	pub fn status(info: Option<&Self>) -> StakeStatus {
		match info {
			None => StakeStatus::NoStake,
			Some(info) if info.locked_balance != Balance::default() =>
				StakeStatus::WithdrawRequested,
			Some(info) if info.staked_balance != Balance::default() => StakeStatus::Staked,
			Some(_) => StakeStatus::Withdrawn,
		}
	}
}
