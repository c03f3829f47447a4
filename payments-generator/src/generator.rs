use std::convert::TryFrom;
use std::io::Write;
use std::num::NonZeroU64;

use chrono::{DateTime, Utc};
use log::{debug, info, trace};

use crate::error::GeneratorError;
use crate::payment::Payment;
use crate::random::RandomSource;

/// How many payments to generate. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordsCount(NonZeroU64);

impl RecordsCount {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<Option<u64>> for RecordsCount {
    type Error = GeneratorError;
    fn try_from(count: Option<u64>) -> Result<Self, Self::Error> {
        count
            .and_then(NonZeroU64::new)
            .map(RecordsCount)
            .ok_or(GeneratorError::MissingRecordsCount)
    }
}

impl TryFrom<u64> for RecordsCount {
    type Error = GeneratorError;
    fn try_from(count: u64) -> Result<Self, Self::Error> {
        RecordsCount::try_from(Some(count))
    }
}

/// Writes payments and their vehicle entrant payments as SQL, one statement per line
#[derive(Debug)]
pub struct Generator<R> {
    rng: R,
    /// Submitted timestamps are drawn from the days leading up to this instant
    now: DateTime<Utc>,
}

impl<R: RandomSource> Generator<R> {
    #[must_use]
    pub fn new(rng: R, now: DateTime<Utc>) -> Self {
        Generator { rng, now }
    }

    /// Each payment statement is immediately followed by the statements of its
    /// vehicle entrant payments.
    ///
    /// # Errors
    /// Errors when writing to `writer` fails. Lines written before the failure are not
    /// retracted.
    pub fn write_records<W: Write>(
        &mut self,
        count: RecordsCount,
        mut writer: W,
    ) -> Result<(), GeneratorError> {
        info!("Generating {} payment records", count.get());
        let mut total_entries: u64 = 0;
        for _ in 0..count.get() {
            let payment = Payment::random(&mut self.rng, self.now);
            writeln!(writer, "{}", payment)?;

            let entries = payment.vehicle_entrant_payments(&mut self.rng);
            debug!(
                "Payment {} split into {} vehicle entrant payments",
                payment.payment_id,
                entries.len()
            );
            for entry in &entries {
                trace!("Vehicle entrant payment {}", entry.vehicle_entrant_payment_id);
                writeln!(writer, "{}", entry)?;
            }
            total_entries += entries.len() as u64;
        }
        writer.flush()?;
        info!(
            "Generated {} payments and {} vehicle entrant payments",
            count.get(),
            total_entries
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::random::test::Sequence;
    use chrono::TimeZone;

    #[test]
    fn test_records_count_try_from() {
        assert!(matches!(
            RecordsCount::try_from(None::<u64>),
            Err(GeneratorError::MissingRecordsCount)
        ));
        assert!(matches!(
            RecordsCount::try_from(Some(0_u64)),
            Err(GeneratorError::MissingRecordsCount)
        ));
        assert!(RecordsCount::try_from(0_u64).is_err());
        assert_eq!(RecordsCount::try_from(Some(3_u64)).unwrap().get(), 3);
        assert_eq!(RecordsCount::try_from(u64::MAX).unwrap().get(), u64::MAX);
    }

    #[test]
    fn test_write_records_from_lowest_draws() {
        let now = Utc.with_ymd_and_hms(2020, 1, 31, 23, 59, 59).unwrap();
        let mut generator = Generator::new(Sequence::new(&[0.0]), now);
        let mut out = Vec::new();
        generator
            .write_records(RecordsCount::try_from(1_u64).unwrap(), &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("insert into payment("));
        assert!(lines[0].ends_with("'SUCCESS', 100, '2020-01-31T23:59:59.000Z');"));
        assert!(lines[1].contains("'31.01.2020', 50, 'PAID');"));
        assert!(lines[2].contains("'01.02.2020', 50, 'PAID');"));
        assert!(output.ends_with(";\n"));
    }
}
