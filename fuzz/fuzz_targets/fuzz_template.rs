#![no_main]

use libfuzzer_sys::fuzz_target;
use voxel_webpage::Template;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let template = Template::parse(source);
        let rendered = template.substitute_one("name", "VoxelTest");

        // without a `$` there is nothing to substitute
        if !source.contains('$') {
            assert_eq!(rendered, source);
        }
    }
});
