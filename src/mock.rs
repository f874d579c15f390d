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

use crate as controller;
use crate::{
	types::{CallIndices, ParaId},
	xcm::HashedLocation,
	Truncate20,
};
use frame_support::{
	assert_ok, log, parameter_types,
	traits::{ConstU16, ConstU64, OnFinalize, UnixTime},
	Hashable, PalletId,
};
use frame_system as system;
use sp_core::{ConstU128, ConstU32, H256, U256};
use sp_runtime::{
	testing::Header,
	traits::{BlakeTwo256, IdentityLookup},
	AccountId32, DispatchError, DispatchResult,
};
use sp_std::cell::RefCell;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use xcm::latest::prelude::*;

pub(crate) type AccountId = AccountId32;
pub(crate) type Balance = u128;
type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Test>;
type Block = frame_system::mocking::MockBlock<Test>;

pub(crate) const EXISTENTIAL_DEPOSIT: Balance = 1;
pub(crate) const INITIAL_BALANCE: Balance = 1_000_000;
pub(crate) const PARA_ID: ParaId = 12;
pub(crate) const PALLET_INSTANCE: u8 = 8;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
	pub enum Test where
		Block = Block,
		NodeBlock = Block,
		UncheckedExtrinsic = UncheckedExtrinsic,
	{
		System: frame_system,
		Balances: pallet_balances::{Pallet, Call, Storage, Config<T>, Event<T>},
		Timestamp: pallet_timestamp::{Pallet, Call, Storage, Inherent},
		Controller: controller
	}
);

impl system::Config for Test {
	type BaseCallFilter = frame_support::traits::Everything;
	type BlockWeights = ();
	type BlockLength = ();
	type RuntimeOrigin = RuntimeOrigin;
	type RuntimeCall = RuntimeCall;
	type Index = u64;
	type BlockNumber = u64;
	type Hash = H256;
	type Hashing = BlakeTwo256;
	type AccountId = AccountId;
	type Lookup = IdentityLookup<Self::AccountId>;
	type Header = Header;
	type RuntimeEvent = RuntimeEvent;
	type BlockHashCount = ConstU64<250>;
	type DbWeight = ();
	type Version = ();
	type PalletInfo = PalletInfo;
	type AccountData = pallet_balances::AccountData<Balance>;
	type OnNewAccount = ();
	type OnKilledAccount = ();
	type SystemWeightInfo = ();
	type SS58Prefix = ConstU16<42>;
	type OnSetCode = ();
	type MaxConsumers = ConstU32<16>;
}

impl pallet_balances::Config for Test {
	type Balance = Balance;
	type DustRemoval = ();
	type RuntimeEvent = RuntimeEvent;
	type ExistentialDeposit = ConstU128<EXISTENTIAL_DEPOSIT>;
	type AccountStore = System;
	type WeightInfo = ();
	type MaxLocks = ();
	type MaxReserves = ();
	type ReserveIdentifier = [u8; 8];
}

impl pallet_timestamp::Config for Test {
	type Moment = u64;
	type OnTimestampSet = ();
	type MinimumPeriod = ConstU64<1>;
	type WeightInfo = ();
}

parameter_types! {
	pub const ControllerPalletId: PalletId = PalletId(*b"py/tlrct");
	pub const V1: CallIndices = CallIndices::V1;
}

impl controller::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type AccountIdToAddress = Truncate20<AccountId>;
	type Balance = Balance;
	type CallIndices = V1;
	type InitOrigin = system::EnsureRoot<AccountId>;
	type LocationToAccount = HashedLocation<AccountId>;
	type MaxAccountLength = ConstU32<32>;
	type PalletId = ControllerPalletId;
	type Time = Timestamp;
	type Token = Balances;
	type Transactor = TestTransactor;
}

/// A call dispatched through [`TestTransactor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SentTransact {
	pub(crate) destination: MultiLocation,
	pub(crate) fee_location: MultiLocation,
	pub(crate) transact_required_weight_at_most: u64,
	pub(crate) call: Vec<u8>,
	pub(crate) fee_amount: U256,
	pub(crate) overall_weight: u64,
}

thread_local! {
	pub static SENT_TRANSACTS: RefCell<Vec<SentTransact>> = RefCell::new(Vec::new());
	pub static TRANSACTOR_FAILS: RefCell<bool> = RefCell::new(false);
	pub static SENT_XCM: RefCell<Vec<(MultiLocation, Xcm<()>)>> = RefCell::new(Vec::new());
}
pub fn sent_transacts() -> Vec<SentTransact> {
	SENT_TRANSACTS.with(|q| (*q.borrow()).clone())
}
pub fn sent_xcm() -> Vec<(MultiLocation, opaque::Xcm)> {
	SENT_XCM.with(|q| (*q.borrow()).clone())
}
/// Causes subsequent dispatches through [`TestTransactor`] to fail.
pub fn fail_transactor(fail: bool) {
	TRANSACTOR_FAILS.with(|f| *f.borrow_mut() = fail);
}

/// Transactor which records dispatched calls, failing when requested.
pub struct TestTransactor;
impl controller::traits::Transactor for TestTransactor {
	fn transact_through_signed(
		destination: MultiLocation,
		fee_location: MultiLocation,
		transact_required_weight_at_most: u64,
		call: Vec<u8>,
		fee_amount: U256,
		overall_weight: u64,
	) -> DispatchResult {
		if TRANSACTOR_FAILS.with(|f| *f.borrow()) {
			return Err(DispatchError::Other("transport unavailable"))
		}
		SENT_TRANSACTS.with(|q| {
			q.borrow_mut().push(SentTransact {
				destination,
				fee_location,
				transact_required_weight_at_most,
				call,
				fee_amount,
				overall_weight,
			})
		});
		Ok(())
	}
}

/// Sender that never returns error, always sends
pub struct TestSendXcm;
impl controller::traits::SendXcm for TestSendXcm {
	fn send_xcm(
		interior: impl Into<Junctions>,
		dest: impl Into<MultiLocation>,
		mut message: Xcm<()>,
	) -> Result<XcmHash, SendError> {
		// From https://github.com/paritytech/polkadot/blob/1203b2519fed1727256556fb879c6c03c27a830d/xcm/pallet-xcm/src/lib.rs#L1450
		let interior = interior.into();
		let dest = dest.into();
		if interior != Junctions::Here {
			message.0.insert(0, DescendOrigin(interior));
		}
		log::debug!(target: "xcm::send_xcm", "dest: {:?}, message: {:?}", &dest, &message);

		// From https://github.com/paritytech/polkadot/blob/645723987cf9662244be8faf4e9b63e8b9a1b3a3/xcm/pallet-xcm/src/mock.rs#L154
		let xcm_hash = message.twox_256();
		SENT_XCM.with(|q| q.borrow_mut().push((dest, message)));
		Ok(xcm_hash)
	}
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext(balances: Vec<AccountId>) -> sp_io::TestExternalities {
	let mut storage = system::GenesisConfig::default().build_storage::<Test>().unwrap();
	pallet_balances::GenesisConfig::<Test> {
		balances: balances.into_iter().map(|a| (a, INITIAL_BALANCE)).collect(),
	}
	.assimilate_storage(&mut storage)
	.unwrap();
	storage.into()
}

/// Starts a new block, executing the supplied closure thereafter.
pub(crate) fn with_block<R>(execute: impl FnOnce() -> R) -> R {
	with_block_after(0, execute)
}

/// Starts a new block after some time, executing the supplied closure thereafter.
pub(crate) fn with_block_after<R>(time_in_secs: u64, execute: impl FnOnce() -> R) -> R {
	let block = System::block_number();
	match block {
		0 => {
			System::set_block_number(1);
			assert_ok!(Timestamp::set(
				RuntimeOrigin::none(),
				SystemTime::now()
					.duration_since(UNIX_EPOCH)
					.expect("Current time is always after unix epoch; qed")
					.as_millis() as u64
			));
		},
		_ => {
			Timestamp::on_finalize(block);
			System::set_block_number(block + 1);
			assert_ok!(Timestamp::set(
				RuntimeOrigin::none(),
				(<Timestamp as UnixTime>::now() + Duration::from_secs(1 + time_in_secs)).as_millis()
					as u64
			));
		},
	}
	let result = execute();
	// Reset events and sent calls after block executed, ensuring we only observe the current block
	System::reset_events();
	SENT_TRANSACTS.with(|q| q.borrow_mut().clear());
	SENT_XCM.with(|q| q.borrow_mut().clear());
	result
}
