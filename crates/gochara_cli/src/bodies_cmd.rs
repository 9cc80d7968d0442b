//! Body listing.

use gochara_ephem::ALL_BODIES;
use gochara_search::valid_body_names;

/// Print the accepted body codes, then one line per body with its graha name.
pub fn run() {
    println!("{}", valid_body_names());
    for body in ALL_BODIES {
        println!("{:<10} {}", body.code(), body.graha_name());
    }
}
