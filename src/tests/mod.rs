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

use crate::{
	mock,
	mock::*,
	types::{Address, ParaId, RemoteAccountOf, Timestamp, Weights},
	xcm::{pallet, HashedLocation},
	Event, Owners, Registrations, StakerDetails, ToWithdraw, TotalStakeAmount, Truncate20,
};
use codec::Encode;
use frame_support::{assert_noop, assert_ok, traits::UnixTime};
use sp_core::U256;
use sp_runtime::traits::{BadOrigin, Convert};
use xcm::latest::prelude::*;


type Error = crate::Error<Test>;

fn alice() -> AccountId {
	AccountId::new([1; 32])
}

fn bob() -> AccountId {
	AccountId::new([2; 32])
}

fn governance() -> AccountId {
	AccountId::new([3; 32])
}

// The account controlled by the oracle pallet on a parachain.
fn owner(para_id: ParaId, pallet_instance: u8) -> AccountId {
	<HashedLocation<AccountId> as xcm_executor::traits::Convert<_, _>>::convert(pallet(
		para_id,
		pallet_instance,
	))
	.unwrap()
}

fn address(account: &AccountId) -> Address {
	Truncate20::<AccountId>::convert(account.clone())
}

// The reporter account on the oracle parachain.
fn reporter() -> Vec<u8> {
	hex::decode("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d").unwrap()
}

fn remote_account(account: Vec<u8>) -> RemoteAccountOf<Test> {
	account.try_into().unwrap()
}

fn fee_location() -> MultiLocation {
	MultiLocation { parents: 1, interior: X1(PalletInstance(3)) }
}

fn destination() -> MultiLocation {
	MultiLocation { parents: 1, interior: X1(Parachain(PARA_ID)) }
}

fn weights() -> Weights {
	Weights {
		report_stake_deposited: 1_218_085_000,
		report_staking_withdraw_request: 1_155_113_000,
		report_stake_withdrawn: 1_051_143_000,
		report_vote_tallied: 1_051_143_000,
		report_vote_executed: 523_243_000,
		report_slash: 1_000_000_000,
	}
}

// Returns the timestamp for the current block.
fn now() -> Timestamp {
	<mock::Timestamp as UnixTime>::now().as_secs()
}

fn register_parachain(weight_to_fee: impl Into<U256>, weights: Weights) {
	assert_ok!(Controller::register(
		RuntimeOrigin::signed(owner(PARA_ID, PALLET_INSTANCE)),
		PARA_ID,
		PALLET_INSTANCE,
		weight_to_fee.into(),
		Box::new(fee_location()),
		weights
	));
}

fn init_governance() {
	assert_ok!(Controller::init(RuntimeOrigin::root(), governance()));
}

fn deposit_stake(staker: &AccountId, amount: Balance) {
	assert_ok!(Controller::deposit_stake(
		RuntimeOrigin::signed(staker.clone()),
		PARA_ID,
		reporter(),
		amount
	));
}

// Builds an expected remote call: the pallet instance and call index, followed by its arguments.
fn call(call_index: &str, args: &[&[u8]]) -> Vec<u8> {
	let mut call = hex::decode(format!("{:02x}{}", PALLET_INSTANCE, call_index)).unwrap();
	for arg in args {
		call.extend_from_slice(arg);
	}
	call
}

// An amount as encoded within a remote call.
fn amount(amount: Balance) -> Vec<u8> {
	U256::from(amount).encode()
}

fn transact(call: Vec<u8>, weight: u64, weight_to_fee: u64) -> SentTransact {
	SentTransact {
		destination: destination(),
		fee_location: fee_location(),
		transact_required_weight_at_most: weight,
		call,
		fee_amount: U256::from(weight) * weight_to_fee,
		overall_weight: weight,
	}
}
