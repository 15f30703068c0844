mod util;
use fab_cast::prelude::*;
use proptest::prelude::*;
use util::*;

#[derive(Clone, Debug)]
struct Case {
    domain: Box3,
    region: Box3,
    src_ncomp: usize,
    dest_ncomp: usize,
    sel: ComponentSelector,
}

fn case() -> impl Strategy<Value = Case> {
    (
        prop::array::uniform3(-3i64..3),
        prop::array::uniform3(1i64..5),
        prop::array::uniform3(0i64..5),
        prop::array::uniform3(0i64..5),
        1usize..4,
        1usize..4,
        0usize..4,
    )
        .prop_flat_map(|(lo, len, roff, rlen, src_ncomp, dest_ncomp, count)| {
            let domain = Box3::new(lo, std::array::from_fn(|d| lo[d] + len[d] - 1));
            let rlo: [i64; 3] = std::array::from_fn(|d| lo[d] + roff[d]);
            let region = Box3::new(rlo, std::array::from_fn(|d| rlo[d] + rlen[d] - 1))
                .intersect(&domain);
            let count = count.min(src_ncomp).min(dest_ncomp);
            (0..=src_ncomp - count, 0..=dest_ncomp - count).prop_map(move |(s, d)| Case {
                domain,
                region,
                src_ncomp,
                dest_ncomp,
                sel: sel(s, d, count),
            })
        })
}

proptest! {
    #[test]
    fn cast_matches_cell_by_cell_model(c in case()) {
        let src = ramp3(c.domain, c.src_ncomp);
        let mut got = CpuArray::<i32, 3>::filled(c.domain, c.dest_ncomp, -9);
        let mut want = got.clone();

        cast_with(&Serial, &mut got, &src, &c.region, c.sel).unwrap();
        reference_cast(&mut want, &src, &c.region, c.sel);
        prop_assert_eq!(got.as_slice(), want.as_slice());
    }

    #[test]
    fn cells_outside_swept_set_are_untouched(c in case()) {
        let src = ramp3(c.domain, c.src_ncomp);
        let mut dest = CpuArray::<f32, 3>::filled(c.domain, c.dest_ncomp, f32::NAN);
        cast(&mut dest, &src, &c.region, c.sel).unwrap();

        let dcomps = c.sel.dest_range().unwrap();
        for n in 0..c.dest_ncomp {
            for idx in c.domain.iter() {
                let swept = dcomps.contains(&n) && c.region.contains(idx);
                prop_assert_eq!(!dest[(idx, n)].is_nan(), swept, "at {:?} comp {}", idx, n);
            }
        }
    }

    #[test]
    fn executor_choice_does_not_change_result(c in case()) {
        let src = ramp3(c.domain, c.src_ncomp);
        let mut forward = CpuArray::<u8, 3>::new(c.domain, c.dest_ncomp);
        let mut backward = forward.clone();
        cast_with(&Serial, &mut forward, &src, &c.region, c.sel).unwrap();
        cast_with(&Reversed, &mut backward, &src, &c.region, c.sel).unwrap();
        prop_assert_eq!(forward.as_slice(), backward.as_slice());
    }
}
