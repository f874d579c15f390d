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
use crate::types::{DisputeId, VoteResult};
use codec::Encode;

pub(crate) fn report_vote_tallied(
	parachain: &Parachain<impl Sized>,
	call_indices: &CallIndices,
	dispute_id: DisputeId,
	outcome: VoteResult,
) -> Vec<u8> {
	call(parachain, call_indices, Report::VoteTallied)
		.fixed_bytes(dispute_id.as_fixed_bytes())
		.byte(outcome.using_encoded(|encoded| encoded[0]))
		.encode()
}

pub(crate) fn report_vote_executed(
	parachain: &Parachain<impl Sized>,
	call_indices: &CallIndices,
	dispute_id: DisputeId,
) -> Vec<u8> {
	call(parachain, call_indices, Report::VoteExecuted)
		.fixed_bytes(dispute_id.as_fixed_bytes())
		.encode()
}
