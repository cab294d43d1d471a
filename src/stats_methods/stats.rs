//all the methods of calculating averages, variances and averaged curves.

#[derive(Clone)]
pub struct MyVariance
{
    pub mean: f64,
    pub var: f64
}

impl MyVariance{

    pub fn mean(&self) -> f64
    {
        self.mean
    }

    pub fn variance_of_mean(&self) -> f64
    {
        self.var
    }

    pub fn from_slice(slice: &[u32], frac: Option<f64>) -> Self
    {
        let mean = calc_average(slice, frac);
        let var = calc_variance(slice, mean, frac);
        Self{
            mean,
            var
        }
    }
}

pub fn calc_average(slice: &[u32], frac: Option<f64>) -> f64
{
    let mut sum = 0_u64;
    for val in slice
    {
        sum += *val as u64;
    }

    let len = slice.len() as u64;
    let rest = sum % len;
    let div = sum / len;

    let res = div as f64 + (rest as f64) / (len as f64);
    match frac{
        None => res,
        Some(f) => res / f
    }
}

pub fn calc_variance(slice: &[u32], average: f64, frac: Option<f64>) -> f64
{
    let mut var_sum = 0.0;

    match frac{
        None => {
            for &val in slice{
                let dif = average - val as f64;
                var_sum += dif * dif;
            }
        },
        Some(v) => {
            for &val in slice{
                let dif = average - val as f64 / v;
                var_sum += dif * dif;
            }
        }
    }


    var_sum / slice.len() as f64
}

/// Mean of a bundle of equally long per-epoch count curves,
/// i.e. the averaged trajectory over repeated simulations.
pub fn mean_curve(curves: &[Vec<u32>], frac: Option<f64>) -> Vec<f64>
{
    let len = curves.first()
        .expect("no curves to aggregate")
        .len();
    let mut mean = vec![0.0; len];
    for curve in curves{
        assert_eq!(curve.len(), len, "curves of unequal length");
        for (m, &val) in mean.iter_mut().zip(curve.iter()){
            *m += val as f64;
        }
    }
    let norm = curves.len() as f64;
    for m in mean.iter_mut(){
        *m /= norm;
        if let Some(f) = frac{
            *m /= f;
        }
    }
    mean
}

/// Population standard deviation per epoch, matching the mean from `mean_curve`
pub fn std_curve(curves: &[Vec<u32>], mean: &[f64], frac: Option<f64>) -> Vec<f64>
{
    let mut var = vec![0.0; mean.len()];
    for curve in curves{
        for ((v, &m), &val) in var.iter_mut().zip(mean.iter()).zip(curve.iter()){
            let val = match frac{
                None => val as f64,
                Some(f) => val as f64 / f
            };
            let dif = val - m;
            *v += dif * dif;
        }
    }
    let norm = curves.len() as f64;
    var.into_iter()
        .map(|v| (v / norm).sqrt())
        .collect()
}


#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    #[should_panic(expected = "no curves to aggregate")]
    fn aggregating_zero_runs_is_rejected()
    {
        mean_curve(&[], None);
    }

    #[test]
    fn variance_of_constant_slice_is_zero()
    {
        let slice = [7_u32; 12];
        let var = MyVariance::from_slice(&slice, None);
        assert!((var.mean() - 7.0).abs() < 1e-12);
        assert!(var.variance_of_mean().abs() < 1e-12);
    }

    #[test]
    fn average_with_fraction()
    {
        let slice = [10_u32, 20, 30];
        let mean = calc_average(&slice, Some(10.0));
        assert!((mean - 2.0).abs() < 1e-12);
    }

    #[test]
    fn curve_aggregation()
    {
        let curves = vec![
            vec![0_u32, 2, 4],
            vec![2_u32, 2, 0]
        ];
        let mean = mean_curve(&curves, None);
        assert_eq!(mean, vec![1.0, 2.0, 2.0]);
        let std = std_curve(&curves, &mean, None);
        assert!((std[0] - 1.0).abs() < 1e-12);
        assert!(std[1].abs() < 1e-12);
        assert!((std[2] - 2.0).abs() < 1e-12);
    }
}
