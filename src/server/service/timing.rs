use std::collections::HashSet;

use entity::sea_orm_active_enums::EstablishmentType;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::timing::{
        AddTimingSlotDto, CreateTimingDto, TimingDto, TimingSlotDto, TimingSlotInputDto,
        UpdateTimingSlotDto,
    },
    server::{
        data::{timing::TimingRepository, timing_slot::TimingSlotRepository},
        error::{
            conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, Error,
        },
        model::{
            db::{TimingModel, TimingSlotModel},
            input::{NewTimingSlot, TimingSlotChanges},
        },
        util::{
            time::{is_before, parse_clock_time},
            validation::field_path,
        },
    },
};

/// Validate a weekly schedule submission
///
/// Rejects an empty list, slots missing a component, slots that do not open before they
/// close and two slots on the same day. Errors are scoped under `prefix`, e.g.
/// `timing.slots[1].closingTime`.
///
/// # Returns
/// - `Ok(Vec<NewTimingSlot>)` - Parsed slots in submission order
/// - `Err(ValidationError)` - The first rule that failed
pub fn validate_slots(
    slots: &[TimingSlotInputDto],
    prefix: &str,
) -> Result<Vec<NewTimingSlot>, ValidationError> {
    let slots_field = field_path(prefix, "slots");

    if slots.is_empty() {
        return Err(ValidationError::new(
            slots_field,
            "At least one time slot is required",
        ));
    }

    let mut parsed = Vec::with_capacity(slots.len());
    let mut seen_days = HashSet::with_capacity(slots.len());

    for (index, slot) in slots.iter().enumerate() {
        let slot_field = format!("{slots_field}[{index}]");

        let (day, opening_time, closing_time) =
            match (slot.day, &slot.opening_time, &slot.closing_time) {
                (Some(day), Some(opening_time), Some(closing_time)) => {
                    (day, opening_time, closing_time)
                }
                _ => {
                    return Err(ValidationError::new(
                        slot_field,
                        "Each slot must have day, openingTime, and closingTime",
                    ))
                }
            };

        let opening_time = parse_clock_time(&field_path(&slot_field, "openingTime"), opening_time)?;
        let closing_time = parse_clock_time(&field_path(&slot_field, "closingTime"), closing_time)?;

        if !is_before(opening_time, closing_time) {
            return Err(ValidationError::new(
                field_path(&slot_field, "closingTime"),
                format!("Opening time must be before closing time for {day}"),
            ));
        }

        if !seen_days.insert(day) {
            return Err(ValidationError::new(
                slots_field,
                "Each day can only have one time slot",
            ));
        }

        parsed.push(NewTimingSlot {
            day,
            opening_time,
            closing_time,
        });
    }

    Ok(parsed)
}

/// Insert a timing header and all of its slots on the given connection
///
/// Slots go in as one multi-row insert. Callers pass a transaction so the header and its
/// slots are committed together.
pub async fn insert_timing<C: ConnectionTrait>(
    db: &C,
    establishment_type: EstablishmentType,
    hotel_stay: bool,
    event_space: bool,
    slots: &[NewTimingSlot],
) -> Result<(TimingModel, Vec<TimingSlotModel>), DbErr> {
    let timing_repo = TimingRepository::new(db);
    let slot_repo = TimingSlotRepository::new(db);

    let timing = timing_repo
        .create(establishment_type, hotel_stay, event_space)
        .await?;
    let slots = slot_repo.create_many(timing.id, slots).await?;

    Ok((timing, slots))
}

pub struct TimingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimingService<'a> {
    /// Creates a new instance of [`TimingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a weekly schedule with its slots in one transaction
    pub async fn create_timing(&self, timing: CreateTimingDto) -> Result<TimingDto, Error> {
        let slots = validate_slots(&timing.slots, "")?;

        let txn = self.db.begin().await?;

        let (timing, slots) = insert_timing(
            &txn,
            timing.establishment_type,
            timing.hotel_stay,
            timing.event_space,
            &slots,
        )
        .await?;

        txn.commit().await?;

        tracing::info!(
            timing_id = %timing.id,
            slots = slots.len(),
            "Created outlet timing"
        );

        Ok(TimingDto::new(timing, slots))
    }

    /// Add a slot for a day the schedule does not cover yet
    ///
    /// # Returns
    /// - `Ok(TimingSlotDto)` - The new slot
    /// - `Err(Error::ValidationError)` - Unparseable times or opening not before closing
    /// - `Err(Error::NotFoundError)` - No timing with the given ID
    /// - `Err(Error::ConflictError)` - The schedule already has a slot for that day
    pub async fn add_slot(
        &self,
        timing_id: Uuid,
        slot: AddTimingSlotDto,
    ) -> Result<TimingSlotDto, Error> {
        let opening_time = parse_clock_time("openingTime", &slot.opening_time)?;
        let closing_time = parse_clock_time("closingTime", &slot.closing_time)?;

        if !is_before(opening_time, closing_time) {
            return Err(ValidationError::new(
                "closingTime",
                format!("Opening time must be before closing time for {}", slot.day),
            )
            .into());
        }

        let txn = self.db.begin().await?;
        let timing_repo = TimingRepository::new(&txn);
        let slot_repo = TimingSlotRepository::new(&txn);

        if timing_repo.get(timing_id).await?.is_none() {
            return Err(NotFoundError::Timing(timing_id).into());
        }

        let existing = slot_repo.find_by_timing(timing_id).await?;
        if existing.iter().any(|s| s.day == slot.day) {
            return Err(ConflictError::SlotDayTaken(slot.day).into());
        }

        let slot = slot_repo
            .create(
                timing_id,
                &NewTimingSlot {
                    day: slot.day,
                    opening_time,
                    closing_time,
                },
            )
            .await
            .map_err(|err| {
                Error::on_unique_violation(err, ConflictError::SlotDayTaken(slot.day))
            })?;

        txn.commit().await?;

        tracing::info!(timing_id = %timing_id, slot_id = %slot.id, day = %slot.day, "Added timing slot");

        Ok(slot.into())
    }

    /// Change any subset of a slot's day, opening and closing time
    ///
    /// The ordering rule is checked against the slot as it will be stored, so moving only
    /// the opening time past the existing closing time is rejected. Moving the slot to a
    /// day another slot of the same schedule already covers is a conflict.
    pub async fn update_slot(
        &self,
        slot_id: Uuid,
        update: UpdateTimingSlotDto,
    ) -> Result<TimingSlotDto, Error> {
        let changes = TimingSlotChanges {
            day: update.day,
            opening_time: update
                .opening_time
                .as_deref()
                .map(|value| parse_clock_time("openingTime", value))
                .transpose()?,
            closing_time: update
                .closing_time
                .as_deref()
                .map(|value| parse_clock_time("closingTime", value))
                .transpose()?,
        };

        let txn = self.db.begin().await?;
        let slot_repo = TimingSlotRepository::new(&txn);

        let slot = match slot_repo.get(slot_id).await? {
            Some(slot) => slot,
            None => return Err(NotFoundError::TimingSlot(slot_id).into()),
        };

        let day = changes.day.unwrap_or(slot.day);
        let opening_time = changes.opening_time.unwrap_or(slot.opening_time);
        let closing_time = changes.closing_time.unwrap_or(slot.closing_time);

        if !is_before(opening_time, closing_time) {
            return Err(ValidationError::new(
                "closingTime",
                format!("Opening time must be before closing time for {day}"),
            )
            .into());
        }

        if day != slot.day {
            let siblings = slot_repo.find_by_timing(slot.outlet_timing_id).await?;
            if siblings.iter().any(|s| s.id != slot.id && s.day == day) {
                return Err(ConflictError::SlotDayTaken(day).into());
            }
        }

        let updated = slot_repo
            .update(slot_id, &changes)
            .await
            .map_err(|err| Error::on_unique_violation(err, ConflictError::SlotDayTaken(day)))?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Timing slot {slot_id} disappeared inside its own update transaction"
                ))
            })?;

        txn.commit().await?;

        tracing::info!(slot_id = %slot_id, "Updated timing slot");

        Ok(updated.into())
    }
}
