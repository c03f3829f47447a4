//! `insert` statements for the generated rows.
//!
//! Values are interpolated as they are, without escaping, so nothing passed through here may
//! contain a single quote. Every generated value satisfies that.

use std::fmt;

use chrono::SecondsFormat;

use crate::payment::{Payment, VehicleEntrantPayment, PAYMENT_METHOD};

/// Travel dates always use day.month.year regardless of the host locale
pub const TRAVEL_DATE_FORMAT: &str = "%d.%m.%Y";

/// A quoted string literal, or `NULL`
struct Nullable<'a>(Option<&'a str>);

impl fmt::Display for Nullable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "'{}'", value),
            None => f.write_str("NULL"),
        }
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insert into payment(payment_id, payment_method, payment_provider_id, \
             payment_provider_status, total_paid, payment_submitted_timestamp) \
             values ('{}', '{}', {}, '{}', {}, '{}');",
            self.payment_id,
            PAYMENT_METHOD,
            Nullable(self.payment_provider_id.as_deref()),
            self.payment_provider_status.as_str(),
            self.total_paid,
            self.payment_submitted_timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

impl fmt::Display for VehicleEntrantPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insert into vehicle_entrant_payment (vehicle_entrant_payment_id, payment_id, vrn, \
             caz_id, travel_date, charge_paid, payment_status) \
             values ('{}', '{}', '{}', '{}', '{}', {}, '{}');",
            self.vehicle_entrant_payment_id,
            self.payment_id,
            self.vrn,
            self.caz_id,
            self.travel_date.format(TRAVEL_DATE_FORMAT),
            self.charge_paid,
            self.payment_status.as_str(),
        )
    }
}
