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
	traits::{SendXcm, Transactor},
	types::ParaId,
	LOG_TARGET,
};
use ::xcm::latest::{prelude::*, MultiLocation};
use codec::Decode;
use core::marker::PhantomData;
use frame_support::{dispatch::DispatchResult, log, weights::Weight};
use sp_core::{Get, U256};
use sp_runtime::{
	traits::{BlakeTwo256, Hash, TrailingZeroInput},
	ArithmeticError, DispatchError,
};
use sp_std::{vec, vec::Vec};
use xcm_executor::traits::Convert;

const PARACHAIN_SELECTOR: u8 = 0x00;
const PALLET_INSTANCE_SELECTOR: u8 = 0x04;
const GENERAL_INDEX_SELECTOR: u8 = 0x05;
const ONLY_CHILD_SELECTOR: u8 = 0x07;

/// The location of a sibling parachain.
pub fn parachain(para_id: ParaId) -> MultiLocation {
	MultiLocation { parents: 1, interior: X1(Parachain(para_id)) }
}

/// The location of a pallet within a sibling parachain.
pub fn pallet(para_id: ParaId, pallet_instance: u8) -> MultiLocation {
	MultiLocation { parents: 1, interior: X2(Parachain(para_id), PalletInstance(pallet_instance)) }
}

/// Encodes the interior of a location as tagged byte strings, one per junction.
///
/// Parachain identifiers and general indices are big-endian. Returns `None` for junctions
/// without a selector.
pub fn selectors(location: &MultiLocation) -> Option<Vec<Vec<u8>>> {
	location
		.interior
		.iter()
		.map(|junction| match junction {
			Parachain(para_id) => {
				let mut selector = vec![PARACHAIN_SELECTOR];
				selector.extend_from_slice(&para_id.to_be_bytes());
				Some(selector)
			},
			PalletInstance(index) => Some(vec![PALLET_INSTANCE_SELECTOR, *index]),
			GeneralIndex(index) => {
				let mut selector = vec![GENERAL_INDEX_SELECTOR];
				selector.extend_from_slice(&index.to_be_bytes());
				Some(selector)
			},
			OnlyChild => Some(vec![ONLY_CHILD_SELECTOR]),
			_ => None,
		})
		.collect()
}

/// Derives an account from a location by hashing its parents and junction selectors.
pub struct HashedLocation<AccountId>(PhantomData<AccountId>);
impl<AccountId: Decode + Clone> Convert<MultiLocation, AccountId> for HashedLocation<AccountId> {
	fn convert(location: MultiLocation) -> Result<AccountId, MultiLocation> {
		let selectors = match selectors(&location) {
			Some(selectors) => selectors,
			None => return Err(location),
		};
		let hash = BlakeTwo256::hash_of(&(b"multiloc", location.parents, selectors));
		AccountId::decode(&mut TrailingZeroInput::new(hash.as_ref())).map_err(|_| location)
	}
}

/// Dispatches remote calls as XCM messages, descending into `Interior` before sending.
///
/// The fee is withdrawn from the fee location and used to buy execution for the overall weight.
/// The proof size of both weights is taken from `ProofSize`.
pub struct SignedTransact<Sender, Interior, ProofSize = ()>(
	PhantomData<(Sender, Interior, ProofSize)>,
);
impl<Sender: SendXcm, Interior: Get<Junctions>, ProofSize: Get<u64>> Transactor
	for SignedTransact<Sender, Interior, ProofSize>
{
	fn transact_through_signed(
		destination: MultiLocation,
		fee_location: MultiLocation,
		transact_required_weight_at_most: u64,
		call: Vec<u8>,
		fee_amount: U256,
		overall_weight: u64,
	) -> DispatchResult {
		let fees = MultiAsset {
			id: Concrete(fee_location),
			fun: Fungible(u128::try_from(fee_amount).map_err(|_| ArithmeticError::Overflow)?),
		};
		let message = Xcm(vec![
			WithdrawAsset(fees.clone().into()),
			BuyExecution {
				fees,
				weight_limit: Limited(Weight::from_parts(overall_weight, ProofSize::get())),
			},
			Transact {
				origin_kind: OriginKind::SovereignAccount,
				require_weight_at_most: Weight::from_parts(
					transact_required_weight_at_most,
					ProofSize::get(),
				),
				call: call.into(),
			},
		]);
		log::trace!(target: LOG_TARGET, "dest: {:?}, message: {:?}", destination, message);
		Sender::send_xcm(Interior::get(), destination, message).map(|_| ()).map_err(|e| {
			log::error!(target: LOG_TARGET, "failed to send xcm to {:?}: {:?}", destination, e);
			DispatchError::Other("SendFailure")
		})
	}
}
