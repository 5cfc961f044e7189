//! Python snippets run by the probes.
//!
//! Each snippet is passed to the interpreter with `-c`, so `sys.argv[0]` is
//! `"-c"` and positional arguments start at `sys.argv[1]`. Snippets report
//! through stdout and signal failure by raising, which gives a non-zero
//! exit and a traceback on stderr.

/// Dump interpreter facts as one JSON object.
pub const INTERPRETER_INFO: &str = r#"import json, platform, sys
print(json.dumps({
    "version": list(sys.version_info[:3]),
    "version_string": sys.version.split()[0],
    "implementation": platform.python_implementation(),
    "prefix": sys.prefix,
    "base_prefix": getattr(sys, "base_prefix", sys.prefix),
    "real_prefix": hasattr(sys, "real_prefix"),
    "executable": sys.executable,
    "system": platform.system(),
    "release": platform.release(),
    "platform": platform.platform(),
    "machine": platform.machine(),
}))
"#;

/// Import `sys.argv[1]` and print its version as JSON (`null` if unknown).
pub const IMPORT_PACKAGE: &str = r#"import importlib, json, sys
name = sys.argv[1]
module = importlib.import_module(name)
version = getattr(module, "__version__", None)
if version is None:
    try:
        from importlib import metadata
        version = metadata.version(name)
    except Exception:
        version = None
print(json.dumps({"version": None if version is None else str(version)}))
"#;

/// Mean of `[1, 2, 3, 4, 5]`, printed with `repr` so `3.0` stays `3.0`.
pub const NUMPY_MEAN: &str = r#"import numpy as np
arr = np.array([1, 2, 3, 4, 5])
print(repr(float(np.mean(arr))))
"#;

/// Row count after filtering `{x: [1, 2, 3], y: [4, 5, 6]}` on `x > 1`.
pub const PANDAS_FILTER: &str = r#"import pandas as pd
df = pd.DataFrame({"x": [1, 2, 3], "y": [4, 5, 6]})
print(len(df[df["x"] > 1]))
"#;

/// Draw a line plot on the non-interactive backend and release the figure.
pub const MATPLOTLIB_SMOKE: &str = r#"import matplotlib
matplotlib.use("Agg")
import matplotlib.pyplot as plt
fig, ax = plt.subplots()
try:
    ax.plot([1, 2, 3], [1, 4, 9])
finally:
    plt.close(fig)
print("ok")
"#;

/// Render `y = x**2` to `sys.argv[1]` at `sys.argv[2]` dpi.
pub const TEST_PLOT: &str = r#"import sys
import matplotlib
matplotlib.use("Agg")
import matplotlib.pyplot as plt
import numpy as np
output, dpi = sys.argv[1], int(sys.argv[2])
x = np.linspace(0, 10, 100)
y = x ** 2
fig = plt.figure(figsize=(10, 6))
try:
    plt.plot(x, y, linewidth=2, color="steelblue")
    plt.title("Setup Test Plot", fontsize=14, fontweight="bold")
    plt.xlabel("X values")
    plt.ylabel("Y values")
    plt.grid(True, alpha=0.3)
    plt.savefig(output, dpi=dpi, bbox_inches="tight")
finally:
    plt.close(fig)
print(output)
"#;
