pub mod test_util;
mod test_cell_state;
mod test_moves;
