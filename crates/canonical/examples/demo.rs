use canonical::{blocks_from_lines, fingerprint, normalize};

fn main() {
    let page = "Section 1: Scope\n\n  The system SHALL   compare\ttwo revisions.\n\
                section 1:  scope\n";

    for block in blocks_from_lines(page) {
        println!("#{} {:?}", block.index(), block.text());
        println!("    normalized:  {:?}", normalize(block.text()));
        println!("    fingerprint: {}", fingerprint(block.text()));
    }
}
