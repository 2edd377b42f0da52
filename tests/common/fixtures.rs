//! Asset content shared by the CLI tests.

#![allow(dead_code)]

pub const STYLE_CSS: &str = "body { margin: 0; background: #000; }\n";

pub const EMSC_JS: &str = "var Module = { canvas: document.getElementById('canvas') };\n";

pub const FAVICON_PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

pub const TEMPLATE_HTML: &str = "<!DOCTYPE html>
<html>
<head><title>${name}</title><link rel=\"stylesheet\" href=\"style.css\"></head>
<body>
<canvas id=\"canvas\"></canvas>
<script src=\"emsc.js\"></script>
<script async src=\"${name}.js\"></script>
<!-- ${missing} costs $$5 -->
</body>
</html>
";

pub const RENDERED_HTML: &str = "<!DOCTYPE html>
<html>
<head><title>VoxelTest</title><link rel=\"stylesheet\" href=\"style.css\"></head>
<body>
<canvas id=\"canvas\"></canvas>
<script src=\"emsc.js\"></script>
<script async src=\"VoxelTest.js\"></script>
<!-- ${missing} costs $5 -->
</body>
</html>
";

/// `fips` launcher stand-in: records its arguments and drops the emscripten
/// artifacts where a real `fips build` leaves them.
pub const FAKE_FIPS: &str = r#"#!/bin/sh
echo "$1 $2" >> fips-calls.txt
if [ "$1" = "build" ]; then
    out="../fips-deploy/voxel-test/$2"
    mkdir -p "$out"
    echo "// wasm glue" > "$out/VoxelTest.js"
    echo "mem" > "$out/VoxelTest.html.mem"
fi
"#;
