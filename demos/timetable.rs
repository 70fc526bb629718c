use timetable_hours::{HourlyRange, RangeInput, SlotEntry, TimeColumn, TimeSlot};

fn main() {
    let stage = TimeColumn::new(
        "18:00",
        "02:00",
        vec![
            SlotEntry::from(RangeInput::new("22:30", "00:30")),
            SlotEntry::from(RangeInput::new("18:00", "19:15")),
            SlotEntry::from(TimeSlot::new("20:00", "21:30").unwrap()),
        ],
    )
    .unwrap();

    println!("Stage open: {} ({} h)", stage.time_range_string(), stage.duration().value());
    for slot in stage.slots() {
        println!(
            "  {slot}  +{:.2} h from {}",
            slot.time_from_timetable_start().value(),
            slot.timetable_start_time()
        );
    }
    println!("First available hour: {:.2}", stage.first_available_hour().value());
    println!(
        "Encore ends at {}",
        HourlyRange::calculate_end_time("23:45", 1.5)
    );
}
