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

//! Encoding of calls to the oracle pallet on a registered parachain.
//!
//! Calls are packed without length prefixes: the pallet instance, the call index and then the
//! call arguments. Amounts are written in the little-endian order of the remote runtime and
//! controller addresses as 20 raw bytes.

use crate::{
	constants::{XCM_INSTRUCTION_COUNT, XCM_INSTRUCTION_FEE},
	types::{Address, CallIndices, Parachain, Report},
	xcm,
};
use ::xcm::latest::MultiLocation;
use sp_core::U256;
use sp_runtime::{traits::Convert, ArithmeticError};
use sp_std::{marker::PhantomData, vec::Vec};

pub(crate) mod governance;
pub(crate) mod staking;

/// Weight of the XCM instructions surrounding a remote call.
pub(crate) const XCM_OVERHEAD: u64 = XCM_INSTRUCTION_FEE * XCM_INSTRUCTION_COUNT;

struct Call {
	encoded: Vec<u8>,
}

impl Call {
	fn new(pallet_instance: u8, call_index: u8) -> Self {
		Call { encoded: sp_std::vec![pallet_instance, call_index] }
	}

	fn account(mut self, account: &[u8]) -> Self {
		self.encoded.extend_from_slice(account);
		self
	}

	fn address(mut self, address: Address) -> Self {
		self.encoded.extend_from_slice(address.as_fixed_bytes());
		self
	}

	fn amount(mut self, amount: impl Into<U256>) -> Self {
		let mut encoded = [0u8; 32];
		reverse256(amount.into()).to_big_endian(&mut encoded);
		self.encoded.extend(encoded);
		self
	}

	fn fixed_bytes(mut self, bytes: &[u8; 32]) -> Self {
		self.encoded.extend_from_slice(bytes);
		self
	}

	fn byte(mut self, byte: u8) -> Self {
		self.encoded.push(byte);
		self
	}

	fn encode(self) -> Vec<u8> {
		self.encoded
	}
}

/// A remote call, ready for dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Transact {
	pub(crate) destination: MultiLocation,
	pub(crate) fee_location: MultiLocation,
	pub(crate) weight: u64,
	pub(crate) call: Vec<u8>,
	pub(crate) fee: U256,
}

/// Prepares a remote call for dispatch to a parachain, calculating its weight budget and fee.
pub(crate) fn transact<AccountId>(
	parachain: &Parachain<AccountId>,
	report: Report,
	call: Vec<u8>,
) -> Result<Transact, ArithmeticError> {
	let weight = weight(parachain.weights.of(report))?;
	Ok(Transact {
		destination: xcm::parachain(parachain.id),
		fee_location: parachain.fee_location,
		weight,
		call,
		fee: fee(weight, parachain.weight_to_fee)?,
	})
}

/// The total weight of a remote call, including the XCM instructions carrying it.
pub(crate) fn weight(transact_weight: u64) -> Result<u64, ArithmeticError> {
	transact_weight.checked_add(XCM_OVERHEAD).ok_or(ArithmeticError::Overflow)
}

/// The fee required to purchase the supplied weight at the given price.
pub(crate) fn fee(weight: u64, weight_to_fee: U256) -> Result<U256, ArithmeticError> {
	U256::from(weight).checked_mul(weight_to_fee).ok_or(ArithmeticError::Overflow)
}

fn call(parachain: &Parachain<impl Sized>, call_indices: &CallIndices, report: Report) -> Call {
	Call::new(parachain.pallet_instance, call_indices.of(report))
}

/// Reverses the byte order of a 256-bit value.
pub fn reverse256(value: U256) -> U256 {
	let mut bytes = [0u8; 32];
	value.to_big_endian(&mut bytes);
	U256::from_little_endian(&bytes)
}

/// Takes the address held within the trailing 20 bytes of a 32-byte word.
pub fn truncate20(word: &[u8; 32]) -> Address {
	Address::from_slice(&word[12..])
}

/// Converts 32-byte account identifiers to addresses using [`truncate20`].
pub struct Truncate20<AccountId>(PhantomData<AccountId>);
impl<AccountId: AsRef<[u8; 32]>> Convert<AccountId, Address> for Truncate20<AccountId> {
	fn convert(account: AccountId) -> Address {
		truncate20(account.as_ref())
	}
}
