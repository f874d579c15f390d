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

pub(crate) fn report_stake_deposited(
	parachain: &Parachain<impl Sized>,
	call_indices: &CallIndices,
	reporter: &[u8],
	amount: impl Into<U256>,
	address: Address,
) -> Vec<u8> {
	call(parachain, call_indices, Report::StakeDeposited)
		.account(reporter)
		.amount(amount)
		.address(address)
		.encode()
}

pub(crate) fn report_staking_withdraw_request(
	parachain: &Parachain<impl Sized>,
	call_indices: &CallIndices,
	reporter: &[u8],
	amount: impl Into<U256>,
	address: Address,
) -> Vec<u8> {
	call(parachain, call_indices, Report::StakeWithdrawRequested)
		.account(reporter)
		.amount(amount)
		.address(address)
		.encode()
}

pub(crate) fn report_stake_withdrawn(
	parachain: &Parachain<impl Sized>,
	call_indices: &CallIndices,
	reporter: &[u8],
	amount: impl Into<U256>,
) -> Vec<u8> {
	call(parachain, call_indices, Report::StakeWithdrawn)
		.account(reporter)
		.amount(amount)
		.encode()
}

pub(crate) fn report_slash(
	parachain: &Parachain<impl Sized>,
	call_indices: &CallIndices,
	reporter: &[u8],
	amount: impl Into<U256>,
) -> Vec<u8> {
	call(parachain, call_indices, Report::Slash).account(reporter).amount(amount).encode()
}
