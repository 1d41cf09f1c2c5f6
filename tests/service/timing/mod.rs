mod add_slot;
mod create_timing;
mod update_slot;
