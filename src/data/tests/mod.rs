use pairing_test_utils::prelude::*;

use crate::model::participant::Participant;
