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

use super::*;
use crate::parachain::{governance, staking, Transact};
use frame_support::log;
use sp_std::vec::Vec;

impl<T: Config> Pallet<T> {
	/// Prepares a remote call for dispatch to a parachain and sends it.
	/// # Arguments
	/// * `parachain` - The registered parachain.
	/// * `report` - The kind of remote call, which determines its weight.
	/// * `call` - The encoded remote call.
	fn report(parachain: &ParachainOf<T>, report: Report, call: Vec<u8>) -> DispatchResult {
		let transact =
			parachain::transact(parachain, report, call).map_err(|_| Error::<T>::Overflow)?;
		log::debug!(
			target: LOG_TARGET,
			"reporting {:?} to parachain {}: weight {}, fee {}",
			report,
			parachain.id,
			transact.weight,
			transact.fee
		);
		Self::send(transact)
	}

	/// Sends a prepared remote call, using its weight budget for both the call and the message.
	/// # Arguments
	/// * `transact` - The remote call.
	pub(crate) fn send(transact: Transact) -> DispatchResult {
		let Transact { destination, fee_location, weight, call, fee } = transact;
		T::Transactor::transact_through_signed(destination, fee_location, weight, call, fee, weight)
			.map_err(|e| {
				log::error!(
					target: LOG_TARGET,
					"failed to dispatch call to {:?}: {:?}",
					destination,
					e
				);
				Error::<T>::TransportFailed.into()
			})
	}
}

impl<T: Config> Reporter<AccountIdOf<T>, BalanceOf<T>> for Pallet<T> {
	fn report_stake_deposited(
		parachain: &ParachainOf<T>,
		reporter: &[u8],
		amount: BalanceOf<T>,
		address: Address,
	) -> DispatchResult {
		Self::report(
			parachain,
			Report::StakeDeposited,
			staking::report_stake_deposited(
				parachain,
				&T::CallIndices::get(),
				reporter,
				amount,
				address,
			),
		)
	}

	fn report_staking_withdraw_request(
		parachain: &ParachainOf<T>,
		reporter: &[u8],
		amount: BalanceOf<T>,
		address: Address,
	) -> DispatchResult {
		Self::report(
			parachain,
			Report::StakeWithdrawRequested,
			staking::report_staking_withdraw_request(
				parachain,
				&T::CallIndices::get(),
				reporter,
				amount,
				address,
			),
		)
	}

	fn report_stake_withdrawn(
		parachain: &ParachainOf<T>,
		reporter: &[u8],
		amount: BalanceOf<T>,
	) -> DispatchResult {
		Self::report(
			parachain,
			Report::StakeWithdrawn,
			staking::report_stake_withdrawn(parachain, &T::CallIndices::get(), reporter, amount),
		)
	}

	fn report_slash(
		parachain: &ParachainOf<T>,
		reporter: &[u8],
		amount: BalanceOf<T>,
	) -> DispatchResult {
		Self::report(
			parachain,
			Report::Slash,
			staking::report_slash(parachain, &T::CallIndices::get(), reporter, amount),
		)
	}

	fn report_vote_tallied(
		parachain: &ParachainOf<T>,
		dispute_id: DisputeId,
		outcome: VoteResult,
	) -> DispatchResult {
		Self::report(
			parachain,
			Report::VoteTallied,
			governance::report_vote_tallied(parachain, &T::CallIndices::get(), dispute_id, outcome),
		)
	}

	fn report_vote_executed(parachain: &ParachainOf<T>, dispute_id: DisputeId) -> DispatchResult {
		Self::report(
			parachain,
			Report::VoteExecuted,
			governance::report_vote_executed(parachain, &T::CallIndices::get(), dispute_id),
		)
	}
}
