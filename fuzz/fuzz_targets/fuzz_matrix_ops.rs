#![no_main]

use libfuzzer_sys::fuzz_target;
use lineal::prelude::*;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick declared dimensions; the rest become elements.
    if data.len() < 2 {
        return;
    }
    let rows = usize::from(data[0] % 8);
    let cols = usize::from(data[1] % 8);
    let values: Vec<f64> = data[2..]
        .chunks(2)
        .map(|c| f64::from(i16::from_le_bytes([c[0], *c.get(1).unwrap_or(&0)])) / 16.0)
        .collect();

    // Construction must agree with the declared shape, never panic
    let Ok(m) = Matrix::from_vec(rows, cols, values.clone()) else {
        assert_ne!(rows * cols, values.len());
        return;
    };
    assert_eq!(m.as_slice().len(), rows * cols);

    // Checked operations either succeed with the right shape or report a mismatch
    let t = m.transpose();
    assert_eq!(t.shape(), (cols, rows));
    assert_eq!(t.transpose(), m);

    match m.matmul(&t) {
        Ok(p) => assert_eq!(p.shape(), (rows, rows)),
        Err(e) => panic!("A * A^T is always defined: {e}"),
    }
    assert_eq!(m.matmul(&m).is_ok(), rows == cols);

    let x = Vector::from_vec(values.iter().take(cols).copied().collect());
    assert_eq!(m.apply(&x).is_ok(), x.len() == cols);

    for r in 0..=rows {
        for c in 0..=cols {
            assert_eq!(m.try_get(r, c).is_ok(), r < rows && c < cols);
        }
    }

    let v = Vector::from_vec(values);
    assert_eq!(v.cross(&v).is_ok(), v.len() == 3);
});
