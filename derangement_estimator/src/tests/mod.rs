// Statistical verification of the estimator.
//
// Unit tests next to each module cover exact behaviour. These tests check
// that the simulation actually behaves the way the mathematics says:
// 1. The derangement rate converges to 1/e (and to D(n)/n! for small n)
// 2. The batch estimates average out close to e
// 3. The corrected standard error matches the observed spread of run means
