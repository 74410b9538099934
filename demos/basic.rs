use specfun::*;

fn main() {
    // -- Gamma family --
    println!("=== Gamma family (f64) ===");
    println!("Γ(4.5)         = {}", gamma(4.5_f64));
    let lg = lgamma(-2.5_f64);
    println!("ln|Γ(-2.5)|    = {} (sign {})", lg.log_abs, lg.sign);
    println!("Γ(-3)/Γ(-7)    = {}", gamma_ratio(&[-3.0_f64], &[-7.0]));
    println!("(2.5)_4        = {}", poch(2.5_f64, 4.0));
    println!("B(2, 3)        = {}", beta(2.0_f64, 3.0));
    println!("ψ(0.5)         = {}", digamma(0.5_f64));
    println!("ψ'(0.5)        = {}", trigamma(0.5_f64));
    println!("ψ⁽⁷⁾(10)       = {}", polygamma(7, 10.0_f64));
    println!("H(10)          = {}", harmonic(10.0_f64));
    println!("P(3, 2.5)      = {}", gamma_reg_p(3.0_f64, 2.5));
    println!("Γ(0, 10)       = {}", gamma_inc_u(0.0_f64, 10.0));

    // -- Integrals --
    println!("\n=== Integrals ===");
    println!("Ei(1)          = {}", ei(1.0_f64));
    println!("E_2(1)         = {}", en(2, 1.0_f64));
    println!("li(10)         = {}", li(10.0_f64));
    println!("Si(10)         = {}", si(10.0_f64));
    println!("Ci(10)         = {}", ci(10.0_f64));
    println!("Shi(1), Chi(1) = {}, {}", shi(1.0_f64), chi(1.0_f64));

    // -- Hypergeometric --
    println!("\n=== Hypergeometric ===");
    println!("0F1(;1;2)      = {}", hyp0f1(1.0_f64, 2.0));
    println!("1F1(2;4;-5)    = {}", hyp1f1(2.0_f64, 4.0, -5.0));
    println!("2F1(3,4;8;1)   = {}", hyp2f1(3.0_f64, 4.0, 8.0, 1.0));
    println!("2F1(∞,9;-∞;1)  = {}", hyp_pfq(&[f64::INFINITY, 9.0], &[f64::NEG_INFINITY], 1.0));

    // -- Polynomials --
    println!("\n=== Orthogonal polynomials ===");
    println!("T_5(0.3)       = {}", chebyshev_t(5, 0.3_f64));
    println!("P_10(0.3)      = {}", legendre_p(10, 0.3_f64));
    println!("P_10^3(0.3)    = {}", legendre_ap(10, 3, 0.3_f64));
    println!("L_5^(2)(1.5)   = {}", laguerre_al(5, 2.0_f64, 1.5));
    println!("H_4(5.5)       = {}", hermite_h(4, 5.5_f64));
    println!("Y_2^1(1, 0.5)  = {}", spherical_harmonic_y(2, 1, 1.0_f64, 0.5));

    // -- Roots and sums --
    println!("\n=== Lambert W, zeta ===");
    println!("W_0(1)         = {} (Ω = {OMEGA})", lambert_w(0, 1.0_f64));
    println!("W_-1(-0.1)     = {}", lambert_w(-1, -0.1_f64));
    println!("ζ(3)           = {}", zeta(3.0_f64));
    println!("η(1)           = {}", eta(1.0_f64));
    println!("F(2.5)         = {}", fibonacci(2.5_f64));

    // -- Special values --
    println!("\n=== Special values ===");
    println!("Γ(-2)          = {}", gamma(-2.0_f64));
    println!("ψ(0)           = {}", digamma(0.0_f64));
    println!("ζ(1)           = {}", zeta(1.0_f64));
    println!("W_0(-1)        = {}", lambert_w(0, -1.0_f64));

    // -- Utilities --
    println!("\n=== Utilities ===");
    match poly(2.0_f64, &[1.0, -3.0, 2.0]) {
        Ok(v) => println!("1 - 3x + 2x² at 2 = {v}"),
        Err(e) => println!("poly failed: {e}"),
    }
    if let Err(e) = poly::<f64>(2.0, &[]) {
        println!("empty coefficients: {e}");
    }

    // -- f32 support --
    println!("\n=== f32 support ===");
    println!("Γ(4.5)         = {} (f32)", gamma(4.5_f32));
    println!("Ei(1)          = {} (f32)", ei(1.0_f32));
    println!("W_0(1)         = {} (f32)", lambert_w(0, 1.0_f32));
}
