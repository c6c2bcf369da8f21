use detf32::{F32, Quat, Vec3, Versor};

fn f(v: f32) -> F32 {
    F32::from_float_bits(v)
}

#[test]
fn vec3_dot_and_cross_are_orthogonal() {
    let a = Vec3::new(f(1.0), f(0.0), f(0.0));
    let b = Vec3::new(f(0.0), f(1.0), f(0.0));
    let cross = a.cross(b);
    assert_eq!(cross.dot(a).to_float_bits(), 0.0);
    assert_eq!(cross.dot(b).to_float_bits(), 0.0);
}

#[test]
fn vec3_normalize_produces_unit_length() {
    let v = Vec3::new(f(3.0), f(4.0), f(0.0));
    let n = v.normalize();
    assert!((n.length().to_float_bits() - 1.0).abs() < 1e-4);
}

#[test]
fn quat_identity_times_anything_is_that_thing() {
    let q = Quat::new(f(0.5), f(0.5), f(0.5), f(0.5));
    let product = Quat::IDENTITY * q;
    assert_eq!(product.w.to_float_bits(), q.w.to_float_bits());
    assert_eq!(product.x.to_float_bits(), q.x.to_float_bits());
}

#[test]
fn versor_rotation_preserves_length() {
    let axis_rotation = Quat::new(
        f((core::f32::consts::FRAC_PI_4).cos()),
        f(0.0),
        f((core::f32::consts::FRAC_PI_4).sin()),
        f(0.0),
    );
    let v = Versor::new(axis_rotation);
    let point = Vec3::new(f(1.0), f(2.0), f(3.0));
    let rotated = v.rotate(point);
    assert!((rotated.length().to_float_bits() - point.length().to_float_bits()).abs() < 1e-3);
}

#[test]
fn versor_inverse_undoes_rotation() {
    let v = Versor::new(Quat::new(f(0.2), f(0.4), f(0.6), f(0.8)));
    let point = Vec3::new(f(1.0), f(0.0), f(0.0));
    let rotated = v.rotate(point);
    let back = v.inverse().rotate(rotated);
    assert!((back.x.to_float_bits() - 1.0).abs() < 1e-3);
    assert!(back.y.to_float_bits().abs() < 1e-3);
    assert!(back.z.to_float_bits().abs() < 1e-3);
}
