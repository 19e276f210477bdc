//! Handlebars sources for the generated accessory files.
//!
//! Every template is rendered with HTML escaping disabled.

/// PyInstaller `.spec` descriptor.
///
/// `icon`, `bundle_icon` are only set when the files exist; `macos_bundle`
/// is only set for the macOS target.
pub const SPEC_TEMPLATE: &str = r#"# -*- mode: python ; coding: utf-8 -*-

block_cipher = None

a = Analysis(
    ['{{source_file}}'],
    pathex=[],
    binaries=[],
    datas=[],
    hiddenimports=[
{{#each hidden_imports}}        '{{this}}',
{{/each}}    ],
    hookspath=[],
    hooksconfig={},
    runtime_hooks=[],
    excludes=[
{{#each excludes}}        '{{this}}',
{{/each}}    ],
    win_no_prefer_redirects=False,
    win_private_assemblies=False,
    cipher=block_cipher,
    noarchive=False,
)

pyz = PYZ(a.pure, a.zipped_data, cipher=block_cipher)

exe = EXE(
    pyz,
    a.scripts,
    a.binaries,
    a.zipfiles,
    a.datas,
    [],
    name='{{product_name}}',
    debug=False,
    bootloader_ignore_signals=False,
    strip=False,
    upx=True,
    upx_exclude=[],
    runtime_tmpdir=None,
    console={{#if console}}True{{else}}False{{/if}},
    disable_windowed_traceback=False,
    argv_emulation=False,
    target_arch=None,
    codesign_identity=None,
    entitlements_file=None,
    icon={{#if icon}}'{{icon}}'{{else}}None{{/if}},
)
{{#if macos_bundle}}
app = BUNDLE(
    exe,
    name='{{product_name}}.app',
    icon={{#if bundle_icon}}'{{bundle_icon}}'{{else}}None{{/if}},
    bundle_identifier='{{bundle_identifier}}',
    info_plist={
        'NSHighResolutionCapable': 'True',
        'LSBackgroundOnly': 'False',
    },
)
{{/if}}"#;

/// End-user README shipped next to the executable.
pub const README_TEMPLATE: &str = r#"# {{product_name}} - User Guide

## Quick Start

### Windows
1. Double-click `{{product_name}}.exe`
2. (Optional) Run `installer_windows.bat` for extra dependencies

### Mac
1. Double-click `{{product_name}}.app`
2. (Optional) Run `./installer_unix.sh` for extra dependencies

### Linux
1. Run `./{{product_name}}`
2. (Optional) Run `./installer_unix.sh` for extra dependencies

---

## Requirements

**Required (already bundled in the executable):**
- Python 3.8+
- tkinterdnd2
- Pillow (PIL)
- trimesh
- numpy
- scipy
- scikit-image
- requests

**Optional (for extra features):**
- COLMAP - Multi-photo photogrammetry (https://colmap.github.io)
- Blender - .blend export (https://www.blender.org)
- rembg - Improved background removal (`pip install rembg`)

---

## Available Methods

### Single Photo (10 methods):
1. **Depth Map** - Fast, 5 seconds
2. **Normal Map** - Surface detail
3. **Extrusion** - Solid for 3D printing
4. **360° Rotation** - Symmetric objects
5. **Full AI 360°** - Recommended, 30 seconds
6. **NeRF** - Photorealistic, 3-5 minutes
7. **Cloud AI** - Maximum quality (requires API key)
8. **Gaussian Splatting** - Real-time HTML viewer
9. **Point-E** - OpenAI diffusion
10. **DreamFusion** - Text-to-3D from a prompt

### Multiple Photos:
- **Photogrammetry** - Precise reconstruction with COLMAP (8-10+ photos)

---

## API Keys (Optional)

For Cloud AI and advanced services:

```bash
# Windows (PowerShell)
$env:TRIPO_API_KEY="your-key"
$env:MESHY_API_KEY="your-key"
$env:OPENAI_API_KEY="your-key"

# Linux/Mac
export TRIPO_API_KEY="your-key"
export MESHY_API_KEY="your-key"
export OPENAI_API_KEY="your-key"
```

**Where to get keys:**
- TripoSR: https://platform.tripo3d.ai (50 free generations/month)
- Meshy: https://www.meshy.ai (200 free credits)
- OpenAI: https://platform.openai.com

---

## Tips for Better Results

### Single Photo:
- Clear, well-lit image
- Uniform background (white/black)
- Centered subject
- Resolution 1000x1000px or higher

### Photogrammetry (multi-photo):
- 8-10+ photos from different angles
- 60-80% overlap between photos
- Constant lighting
- Static background

### Text-to-3D (DreamFusion):
- Detailed prompts in English
- Specify a style (realistic, cartoon, etc.)
- Mention materials (metal, wood, etc.)

---

## Export Formats

- **PLY** - Point cloud, universal
- **OBJ** - Mesh with texture
- **STL** - 3D printing
- **BLEND** - Native Blender (requires Blender)
- **HTML** - Interactive viewer (Gaussian Splatting only)

---

## Troubleshooting

### "COLMAP not found"
- Install COLMAP: https://colmap.github.io/install.html
- Or use the single-photo methods

### "Blender not found"
- Install Blender: https://www.blender.org
- Or disable .blend export

### The executable does not start
- Windows: Run as administrator
- Mac: System Settings > Privacy & Security, allow the app
- Linux: `chmod +x {{product_name}}`

### Out of memory
- Reduce image resolution
- Use one method at a time
- Close unused applications

---

## Support

For issues, suggestions or contributions:
- GitHub: [link-repo]
- Email: support@example.com

---

## License

MIT License - Free for personal and commercial use

---

## Credits

Built on:
- NeRF (Neural Radiance Fields)
- Gaussian Splatting (3DGS)
- Point-E (OpenAI)
- DreamFusion (Google Research)
- COLMAP (Photogrammetry)
"#;

/// Windows batch helper for optional dependencies.
pub const WINDOWS_INSTALLER_TEMPLATE: &str = r#"@echo off
echo ========================================
echo {{product_name}} - Installer
echo ========================================
echo.

echo Installing optional dependencies...
echo.

REM Check for Python
python --version >nul 2>&1
if errorlevel 1 (
    echo ERROR: Python not found!
    echo Download Python from: https://www.python.org/downloads/
    pause
    exit /b 1
)

echo [1/2] COLMAP (optional, for photogrammetry)...
echo For photogrammetry, download COLMAP from:
echo https://colmap.github.io/install.html
echo.

echo [2/2] Blender (optional, for .blend export)...
echo For .blend export, download Blender from:
echo https://www.blender.org/download/
echo.

echo ========================================
echo Installation complete!
echo ========================================
echo.
echo Run: {{product_name}}.exe
echo.
pause
"#;

/// Unix shell helper for optional dependencies.
pub const UNIX_INSTALLER_TEMPLATE: &str = r#"#!/bin/bash

echo "========================================"
echo "{{product_name}} - Installer"
echo "========================================"
echo ""

# Check for Python
if ! command -v python3 &> /dev/null; then
    echo "ERROR: Python not found!"
    echo "Install Python 3.8+ from your package manager"
    exit 1
fi

echo "[1/3] COLMAP (optional, for photogrammetry)..."
if [[ "$OSTYPE" == "linux-gnu"* ]]; then
    echo "Linux: sudo apt install colmap"
elif [[ "$OSTYPE" == "darwin"* ]]; then
    echo "Mac: brew install colmap"
fi
echo ""

echo "[2/3] Blender (optional)..."
if [[ "$OSTYPE" == "linux-gnu"* ]]; then
    echo "Linux: sudo snap install blender --classic"
elif [[ "$OSTYPE" == "darwin"* ]]; then
    echo "Mac: brew install --cask blender"
fi
echo ""

echo "[3/3] Installing rembg (optional, for background removal)..."
pip3 install rembg
echo ""

echo "========================================"
echo "Installation complete!"
echo "========================================"
echo ""
echo "Run: ./{{product_name}}"
echo ""
"#;
