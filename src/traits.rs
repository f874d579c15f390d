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

use crate::types::{Address, DisputeId, Parachain, VoteResult};
use frame_support::dispatch::DispatchResult;
use sp_core::U256;
use sp_std::vec::Vec;
use xcm::latest::prelude::*;

// Simple trait to avoid taking a hard dependency on pallet-xcm.
pub trait SendXcm {
	fn send_xcm(
		interior: impl Into<Junctions>,
		dest: impl Into<MultiLocation>,
		message: Xcm<()>,
	) -> Result<XcmHash, SendError>;
}

/// Transport capability which dispatches a call on a remote chain, signed by the local origin.
pub trait Transactor {
	/// Sends a remote call, paying for its execution from the fee location.
	/// # Arguments
	/// * `destination` - The location of the remote chain.
	/// * `fee_location` - The location of the asset used to pay for execution.
	/// * `transact_required_weight_at_most` - The weight limit of the remote call.
	/// * `call` - The encoded remote call.
	/// * `fee_amount` - The amount of the fee asset to withdraw for execution.
	/// * `overall_weight` - The weight to purchase for the whole message.
	fn transact_through_signed(
		destination: MultiLocation,
		fee_location: MultiLocation,
		transact_required_weight_at_most: u64,
		call: Vec<u8>,
		fee_amount: U256,
		overall_weight: u64,
	) -> DispatchResult;
}

/// Reports local staking and governance events to a registered oracle parachain.
pub trait Reporter<AccountId, Balance> {
	/// Reports a stake deposited by a reporter.
	/// # Arguments
	/// * `parachain` - The registered parachain.
	/// * `reporter` - The reporter account on the parachain.
	/// * `amount` - The total amount staked.
	/// * `address` - The staker address on the controller chain.
	fn report_stake_deposited(
		parachain: &Parachain<AccountId>,
		reporter: &[u8],
		amount: Balance,
		address: Address,
	) -> DispatchResult;

	/// Reports a staking withdrawal request by a reporter.
	/// # Arguments
	/// * `parachain` - The registered parachain.
	/// * `reporter` - The reporter account on the parachain.
	/// * `amount` - The amount requested to withdraw.
	/// * `address` - The staker address on the controller chain.
	fn report_staking_withdraw_request(
		parachain: &Parachain<AccountId>,
		reporter: &[u8],
		amount: Balance,
		address: Address,
	) -> DispatchResult;

	/// Reports a stake withdrawal by a reporter.
	/// # Arguments
	/// * `parachain` - The registered parachain.
	/// * `reporter` - The reporter account on the parachain.
	/// * `amount` - The amount withdrawn.
	fn report_stake_withdrawn(
		parachain: &Parachain<AccountId>,
		reporter: &[u8],
		amount: Balance,
	) -> DispatchResult;

	/// Reports the slashing of a reporter.
	/// # Arguments
	/// * `parachain` - The registered parachain.
	/// * `reporter` - The reporter account on the parachain.
	/// * `amount` - The amount slashed.
	fn report_slash(
		parachain: &Parachain<AccountId>,
		reporter: &[u8],
		amount: Balance,
	) -> DispatchResult;

	/// Reports the tally of a dispute vote.
	/// # Arguments
	/// * `parachain` - The registered parachain.
	/// * `dispute_id` - The identifier of the dispute.
	/// * `outcome` - The result of the vote.
	fn report_vote_tallied(
		parachain: &Parachain<AccountId>,
		dispute_id: DisputeId,
		outcome: VoteResult,
	) -> DispatchResult;

	/// Reports the execution of a dispute vote.
	/// # Arguments
	/// * `parachain` - The registered parachain.
	/// * `dispute_id` - The identifier of the dispute.
	fn report_vote_executed(parachain: &Parachain<AccountId>, dispute_id: DisputeId)
		-> DispatchResult;
}
