#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;

extern crate bitsearch;

mod move_gen_benches;

criterion_main! {
    board_benches::board_benches,
    move_gen_benches::movegen_benches,
    bot_benches::bot_benches
}
