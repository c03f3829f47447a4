use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::random::{
    random_alphabetic_string, random_digit, random_int_inclusive, random_offset_within_days,
    random_vrn, uuid_v4, RandomSource,
};

pub const PAYMENT_METHOD: &str = "CREDIT_DEBIT_CARD";
/// The single clean air zone every generated entrant is charged in
pub const CAZ_ID: &str = "938cac88-1103-11ea-a1a6-33ad4299653d";
/// How far back submitted timestamps and travel dates may reach
pub const LOOKBACK_DAYS: u32 = 14;
pub const PROVIDER_ID_LENGTH: usize = 10;
pub const MIN_TOTAL_PAID: u32 = 100;
pub const MAX_TOTAL_PAID: u32 = 500;
pub const MIN_VEHICLE_ENTRANT_PAYMENTS: u32 = 2;
pub const MAX_VEHICLE_ENTRANT_PAYMENTS: u32 = 10;

/// Status reported by the payment provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalPaymentStatus {
    Created,
    Success,
}

/// Status stored against each vehicle entrant payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalPaymentStatus {
    Paid,
    NotPaid,
}

impl ExternalPaymentStatus {
    /// Odd digits give `Created`, even ones `Success`
    #[must_use]
    pub fn random(rng: &mut impl RandomSource) -> Self {
        if random_digit(rng) & 1 == 1 {
            ExternalPaymentStatus::Created
        } else {
            ExternalPaymentStatus::Success
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExternalPaymentStatus::Created => "CREATED",
            ExternalPaymentStatus::Success => "SUCCESS",
        }
    }
}

impl InternalPaymentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InternalPaymentStatus::Paid => "PAID",
            InternalPaymentStatus::NotPaid => "NOT_PAID",
        }
    }
}

impl From<ExternalPaymentStatus> for InternalPaymentStatus {
    fn from(status: ExternalPaymentStatus) -> Self {
        match status {
            ExternalPaymentStatus::Success => InternalPaymentStatus::Paid,
            ExternalPaymentStatus::Created => InternalPaymentStatus::NotPaid,
        }
    }
}

/// A row of the `payment` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub payment_id: String,
    /// Rendered as `NULL` when absent
    pub payment_provider_id: Option<String>,
    pub payment_provider_status: ExternalPaymentStatus,
    pub total_paid: u32,
    pub payment_submitted_timestamp: DateTime<Utc>,
}

/// A row of the `vehicle_entrant_payment` table, one day of travel paid by a [`Payment`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleEntrantPayment {
    pub vehicle_entrant_payment_id: String,
    pub payment_id: String,
    pub vrn: String,
    pub caz_id: &'static str,
    pub travel_date: NaiveDate,
    pub charge_paid: u32,
    pub payment_status: InternalPaymentStatus,
}

impl Payment {
    /// Builds a payment submitted at most [`LOOKBACK_DAYS`] before `now`.
    ///
    /// The provider id is always present.
    #[must_use]
    pub fn random(rng: &mut impl RandomSource, now: DateTime<Utc>) -> Self {
        let payment_provider_id = Some(random_alphabetic_string(rng, PROVIDER_ID_LENGTH));
        let payment_provider_status = ExternalPaymentStatus::random(rng);
        let payment_submitted_timestamp = now - random_offset_within_days(rng, LOOKBACK_DAYS);
        let payment_id = uuid_v4(rng);
        let total_paid = random_int_inclusive(rng, MIN_TOTAL_PAID, MAX_TOTAL_PAID);
        Payment {
            payment_id,
            payment_provider_id,
            payment_provider_status,
            total_paid,
            payment_submitted_timestamp,
        }
    }

    #[must_use]
    pub fn internal_status(&self) -> InternalPaymentStatus {
        InternalPaymentStatus::from(self.payment_provider_status)
    }

    /// Splits this payment over consecutive travel days of a single vehicle.
    ///
    /// The first travel day is at most [`LOOKBACK_DAYS`] before the submitted timestamp and
    /// `total_paid` is divided evenly (rounding down) between the entries.
    #[must_use]
    pub fn vehicle_entrant_payments(
        &self,
        rng: &mut impl RandomSource,
    ) -> Vec<VehicleEntrantPayment> {
        let count = random_int_inclusive(
            rng,
            MIN_VEHICLE_ENTRANT_PAYMENTS,
            MAX_VEHICLE_ENTRANT_PAYMENTS,
        );
        let start_travel_date = (self.payment_submitted_timestamp
            - random_offset_within_days(rng, LOOKBACK_DAYS))
        .date_naive();
        let vrn = random_vrn(rng);
        let charge_paid = self.total_paid / count;
        let payment_status = self.internal_status();

        (0..count)
            .map(|day| VehicleEntrantPayment {
                vehicle_entrant_payment_id: uuid_v4(rng),
                payment_id: self.payment_id.clone(),
                vrn: vrn.clone(),
                caz_id: CAZ_ID,
                travel_date: start_travel_date + Duration::days(i64::from(day)),
                charge_paid,
                payment_status,
            })
            .collect()
    }
}
