/// Random alphanumeric string, used to build unique test fixtures.
pub fn rand_str(length: usize) -> String {
    use rand::distributions::{Alphanumeric, DistString};

    Alphanumeric.sample_string(&mut rand::thread_rng(), length)
}
